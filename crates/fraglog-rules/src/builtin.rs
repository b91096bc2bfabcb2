//! The builtin pattern tables and the system-message denylist.
//!
//! Table order is load-bearing. Within each tier the first matching rule
//! wins, so specific phrasings must sit above generic ones: "was blasted by"
//! would swallow half the kill messages if it ran first, and the generic
//! award annotation would swallow the Head Hunter / Bully / Specialist forms
//! that carry an extra capture.

use crate::rule::{AnnotationKind, Badge, LineRule};
use crate::weapon::WeaponId;

/// The builtin rule table, in priority order.
///
/// Kill rules capture `(victim, killer)`, suicide rules `(player)`,
/// annotation rules per their [`AnnotationKind`].
pub fn builtin_rules() -> Vec<LineRule> {
    vec![
        // Kill tier
        LineRule::kill(r"(.+) was railed by (.+)", WeaponId::Railgun),
        LineRule::kill(r"(.+) ate (.+?)'s rocket", WeaponId::RocketLauncher),
        LineRule::kill(r"(.+) was machinegunned by (.+)", WeaponId::Machinegun),
        LineRule::kill(r"(.+) was cut in half by (.+?)'s chaingun", WeaponId::Chaingun),
        LineRule::kill(r"(.+) almost dodged (.+?)'s rocket", WeaponId::RocketLauncher),
        LineRule::kill(
            r"(.+) was blown away by (.+?)'s super shotgun",
            WeaponId::SuperShotgun,
        ),
        LineRule::kill(r"(.+) was melted by (.+?)'s hyperblaster", WeaponId::Hyperblaster),
        LineRule::kill(r"(.+) saw the pretty lights from (.+?)'s BFG", WeaponId::Bfg),
        LineRule::kill(r"(.+) was disintegrated by (.+?)'s BFG blast", WeaponId::Bfg),
        LineRule::kill(r"(.+) was blasted by (.+)", WeaponId::Blaster),
        LineRule::kill(r"(.+) was gunned down by (.+)", WeaponId::Shotgun),
        LineRule::kill(r"(.+) was popped by (.+?)'s grenade", WeaponId::Grenade),
        LineRule::kill(r"(.+) was shredded by (.+?)'s shrapnel", WeaponId::Grenade),
        LineRule::kill(r"(.+) caught (.+?)'s handgrenade", WeaponId::Grenade),
        LineRule::kill(r"(.+) didn't see (.+?)'s handgrenade", WeaponId::Grenade),
        LineRule::kill(r"(.+) feels (.+?)'s pain", WeaponId::Telefrag),
        LineRule::kill(
            r"(.+) tried to invade (.+?)'s personal space",
            WeaponId::Telefrag,
        ),
        LineRule::kill(r"(.+) couldn't hide from (.+?)'s BFG", WeaponId::Bfg),
        // Suicide tier
        LineRule::suicide(r"(.+) does a back flip into the lava"),
        // Annotation tier
        LineRule::annotation(r"(.+) picked quad (\d+) times", AnnotationKind::QuadsPicked),
        LineRule::annotation(
            r"(.+) gets a Best Frag",
            AnnotationKind::Badge(Badge::BestFrag),
        ),
        LineRule::annotation(r"(.+) gets a WFT", AnnotationKind::Badge(Badge::Wft)),
        LineRule::annotation(
            r"(.+) gets a Dominator",
            AnnotationKind::Badge(Badge::Dominator),
        ),
        LineRule::annotation(
            r"(.+) gets a WillPower",
            AnnotationKind::Badge(Badge::WillPower),
        ),
        LineRule::annotation(
            r"(.+) gets a Head Hunter award with (\d+) kills on (.+)",
            AnnotationKind::HeadHunter,
        ),
        LineRule::annotation(
            r"(.+) gets a Bully award with (\d+) kills on (.+)",
            AnnotationKind::Bully,
        ),
        LineRule::annotation(
            r"(.+) gets a Specialist award with (\d+) kills using (.+)",
            AnnotationKind::Specialist,
        ),
        LineRule::annotation(
            r"(.+) gets an? (.+?) award with (\d+)",
            AnnotationKind::Award,
        ),
    ]
}

/// Substrings identifying server lifecycle and system noise.
///
/// Lines containing any of these are dropped during partitioning: they are
/// neither game events nor chat candidates. Plain substring containment,
/// not regex.
pub const SYSTEM_MESSAGES: &[&str] = &[
    "Out of item:",
    "remaining in match",
    "Logging console ",
    "----- MVD_GameShutdown -----",
    "[MVD]",
    "No players to chase.",
    "No Grenades",
    "No Rockets",
    "No Cells",
    "No Slugs",
    "No Nails",
    "No Bullets",
    "is ready!",
    "connected",
    "entered the game",
    "disconnected",
    "All players ready!",
];
