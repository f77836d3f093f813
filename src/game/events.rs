use bevy::prelude::*;

/// Fired when the player starts a new level (HUD shows "Level: N")
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChanged {
    pub level: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::app::App;

    #[test]
    fn level_changed_can_be_written_and_read() {
        #[derive(Resource, Default)]
        struct Seen(Vec<u32>);

        fn collect(mut reader: MessageReader<LevelChanged>, mut seen: ResMut<Seen>) {
            for event in reader.read() {
                seen.0.push(event.level);
            }
        }

        let mut app = App::new();
        app.add_message::<LevelChanged>();
        app.init_resource::<Seen>();
        app.add_systems(Update, collect);

        app.world_mut().write_message(LevelChanged { level: 3 });
        app.update();

        assert_eq!(app.world().resource::<Seen>().0, vec![3]);
    }
}
