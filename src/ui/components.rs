use bevy::prelude::*;

use crate::element::Element;

/// Root node of the in-game HUD, hidden while the upgrade menu is open
#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct LevelText;

#[derive(Component)]
pub struct HealthText;

#[derive(Component)]
pub struct SpellBufferText;

/// Current combo for one element
#[derive(Component)]
pub struct ComboText {
    pub element: Element,
}

/// "Press ENTER ..." line under the HUD
#[derive(Component)]
pub struct PromptText;

#[derive(Component)]
pub struct GameOverBanner;

#[derive(Component)]
pub struct UpgradeMenuRoot;

/// Upgrade menu entry. `element: None` is the skip button.
#[derive(Component)]
pub struct UpgradeButton {
    pub element: Option<Element>,
}

/// Caption under an upgrade button showing the next level or the max-level notice
#[derive(Component)]
pub struct UpgradeLabel {
    pub element: Element,
}
