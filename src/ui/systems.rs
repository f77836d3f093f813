use bevy::prelude::*;

use crate::combat::events::PlayerHealthChanged;
use crate::element::Element;
use crate::game::components::GameplayEntity;
use crate::game::events::LevelChanged;
use crate::game::resources::LevelProgress;
use crate::spell::events::{ComboChanged, SpellBufferChanged, SpellCastEvent, UpgradeSpellRequest};
use crate::spell::resources::ComboRegistry;
use crate::states::GameState;
use crate::ui::components::*;

pub const MAX_LEVEL_TEXT: &str = "Spell at max level!";

const BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.25);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.35, 0.35, 0.4);
const FAILED_CAST_COLOR: Color = Color::srgb(1.0, 0.3, 0.3);

/// Prompt line for the current state, if any
pub fn prompt_text(state: GameState, progress: &LevelProgress) -> Option<&'static str> {
    match state {
        GameState::GameOver => Some("Press ENTER to play again"),
        GameState::InGame if progress.can_start_level => {
            if progress.level == 0 {
                Some("Press ENTER to start")
            } else {
                Some("Press ENTER for next level")
            }
        }
        _ => None,
    }
}

/// Keys 1-3 pick an element, 4 skips
pub fn upgrade_key_choice(key: KeyCode) -> Option<UpgradeSpellRequest> {
    let element = match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(Element::Fire),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(Element::Water),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(Element::Grass),
        KeyCode::Digit4 | KeyCode::Numpad4 => None,
        _ => return None,
    };
    Some(UpgradeSpellRequest { element })
}

pub fn upgrade_label_text(element: Element, registry: &ComboRegistry) -> String {
    if registry.can_upgrade(element) {
        let level = registry.level_of(element);
        format!("Lv {} -> {}", level, level + 1)
    } else {
        MAX_LEVEL_TEXT.to_string()
    }
}

fn hud_text(text: impl Into<String>, font_size: f32, color: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
    )
}

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            HudRoot,
            GameplayEntity,
        ))
        .with_children(|parent| {
            // Top left: level, health, buffer
            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(20.0),
                    left: Val::Px(20.0),
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((hud_text("Level: 1", 24.0, Color::srgb(1.0, 1.0, 0.0)), LevelText));
                    column.spawn((hud_text("Health: -", 24.0, Color::WHITE), HealthText));
                    column.spawn((hud_text("", 32.0, Color::WHITE), SpellBufferText));
                });

            // Top right: combos per element
            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(20.0),
                    right: Val::Px(20.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::FlexEnd,
                    row_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|column| {
                    for element in Element::all() {
                        column.spawn((
                            hud_text(format!("{element}: -"), 22.0, element.color()),
                            ComboText { element: *element },
                        ));
                    }
                });

            // Center: game over banner and prompt
            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    width: Val::Percent(100.0),
                    top: Val::Percent(35.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(20.0),
                    ..default()
                })
                .with_children(|center| {
                    center.spawn((
                        hud_text("Game Over", 60.0, Color::WHITE),
                        Visibility::Hidden,
                        GameOverBanner,
                    ));
                    center.spawn((
                        hud_text("", 24.0, Color::srgb(0.8, 0.8, 0.8)),
                        PromptText,
                    ));
                });
        });
}

pub fn update_level_text_system(
    mut events: MessageReader<LevelChanged>,
    mut query: Query<&mut Text, With<LevelText>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };
    for mut text in query.iter_mut() {
        **text = format!("Level: {}", event.level);
    }
}

pub fn update_health_text_system(
    mut events: MessageReader<PlayerHealthChanged>,
    mut query: Query<&mut Text, With<HealthText>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };
    for mut text in query.iter_mut() {
        **text = format!("Health: {}", event.current);
    }
}

/// Shows the typed combo; a fizzled cast tints it until the next key
pub fn update_spell_buffer_text_system(
    mut buffer_changes: MessageReader<SpellBufferChanged>,
    mut casts: MessageReader<SpellCastEvent>,
    mut query: Query<(&mut Text, &mut TextColor), With<SpellBufferText>>,
) {
    let latest = buffer_changes.read().last().cloned();
    let failed = casts.read().any(|cast| !cast.success);

    for (mut text, mut color) in query.iter_mut() {
        if let Some(change) = &latest {
            **text = change.text();
            if !change.symbols.is_empty() {
                color.0 = Color::WHITE;
            }
        }
        if failed {
            color.0 = FAILED_CAST_COLOR;
        }
    }
}

pub fn update_combo_texts_system(
    mut events: MessageReader<ComboChanged>,
    mut query: Query<(&mut Text, &ComboText)>,
) {
    for event in events.read() {
        for (mut text, combo_text) in query.iter_mut() {
            if combo_text.element == event.element {
                **text = format!("{}: {}", event.element, event.combo);
            }
        }
    }
}

pub fn update_prompt_system(
    state: Res<State<GameState>>,
    progress: Res<LevelProgress>,
    mut query: Query<(&mut Text, &mut Visibility), With<PromptText>>,
) {
    let prompt = prompt_text(*state.get(), &progress);
    for (mut text, mut visibility) in query.iter_mut() {
        match prompt {
            Some(line) => {
                if text.as_str() != line {
                    **text = line.to_string();
                }
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

pub fn show_game_over_banner(mut query: Query<&mut Visibility, With<GameOverBanner>>) {
    for mut visibility in query.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}

pub fn hide_hud(mut query: Query<&mut Visibility, With<HudRoot>>) {
    for mut visibility in query.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}

pub fn show_hud(mut query: Query<&mut Visibility, With<HudRoot>>) {
    for mut visibility in query.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}

pub fn spawn_upgrade_menu(mut commands: Commands, registry: Res<ComboRegistry>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            UpgradeMenuRoot,
            GameplayEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                hud_text("Upgrade a spell", 48.0, Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(20.0),
                    ..default()
                })
                .with_children(|row| {
                    for (index, element) in Element::all().iter().enumerate() {
                        row.spawn(Node {
                            flex_direction: FlexDirection::Column,
                            align_items: AlignItems::Center,
                            row_gap: Val::Px(8.0),
                            ..default()
                        })
                        .with_children(|column| {
                            spawn_upgrade_button(
                                column,
                                format!("{} {}", index + 1, element),
                                element.color(),
                                Some(*element),
                            );
                            column.spawn((
                                hud_text(
                                    upgrade_label_text(*element, &registry),
                                    18.0,
                                    Color::srgb(0.8, 0.8, 0.8),
                                ),
                                UpgradeLabel { element: *element },
                            ));
                        });
                    }

                    spawn_upgrade_button(row, "4 Skip".to_string(), Color::WHITE, None);
                });
        });
}

fn spawn_upgrade_button(
    parent: &mut ChildSpawnerCommands,
    caption: String,
    color: Color,
    element: Option<Element>,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(160.0),
                height: Val::Px(50.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
            UpgradeButton { element },
        ))
        .with_children(|button| {
            button.spawn(hud_text(caption, 24.0, color));
        });
}

pub fn despawn_upgrade_menu(mut commands: Commands, menus: Query<Entity, With<UpgradeMenuRoot>>) {
    for entity in menus.iter() {
        commands.entity(entity).try_despawn();
    }
}

/// Keeps the level captions in sync after a failed upgrade attempt
pub fn refresh_upgrade_labels_system(
    registry: Res<ComboRegistry>,
    mut labels: Query<(&mut Text, &UpgradeLabel)>,
) {
    if !registry.is_changed() {
        return;
    }
    for (mut text, label) in labels.iter_mut() {
        **text = upgrade_label_text(label.element, &registry);
    }
}

/// Number keys or a clicked button pick the upgrade
pub fn upgrade_menu_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Query<(&Interaction, &UpgradeButton), Changed<Interaction>>,
    mut requests: MessageWriter<UpgradeSpellRequest>,
) {
    let from_keys = keys.get_just_pressed().find_map(|key| upgrade_key_choice(*key));
    let from_buttons = || {
        buttons
            .iter()
            .find(|(interaction, _)| **interaction == Interaction::Pressed)
            .map(|(_, button)| UpgradeSpellRequest {
                element: button.element,
            })
    };

    if let Some(request) = from_keys.or_else(from_buttons) {
        requests.write(request);
    }
}

pub fn upgrade_button_colors_system(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<UpgradeButton>)>,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        background.0 = match interaction {
            Interaction::Hovered | Interaction::Pressed => BUTTON_HOVER_COLOR,
            Interaction::None => BUTTON_COLOR,
        };
    }
}
