//! Weapon identities for kill attribution.

use std::fmt;

use serde::Serialize;

/// One of the fixed, closed set of weapons / kill methods.
///
/// Declaration order is canonical: it drives `Ord` (and therefore the key
/// order of serialized weapon maps) and the iteration order of
/// [`WeaponId::ALL`]. Serialized names are the display names used by the
/// report consumers, so renames here are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WeaponId {
    Railgun,
    #[serde(rename = "Rocket Launcher")]
    RocketLauncher,
    Machinegun,
    Chaingun,
    #[serde(rename = "Super Shotgun")]
    SuperShotgun,
    Hyperblaster,
    #[serde(rename = "BFG")]
    Bfg,
    Grenade,
    Telefrag,
    Shotgun,
    Blaster,
}

impl WeaponId {
    /// Every weapon, in canonical order.
    pub const ALL: [WeaponId; 11] = [
        WeaponId::Railgun,
        WeaponId::RocketLauncher,
        WeaponId::Machinegun,
        WeaponId::Chaingun,
        WeaponId::SuperShotgun,
        WeaponId::Hyperblaster,
        WeaponId::Bfg,
        WeaponId::Grenade,
        WeaponId::Telefrag,
        WeaponId::Shotgun,
        WeaponId::Blaster,
    ];

    /// The display name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            WeaponId::Railgun => "Railgun",
            WeaponId::RocketLauncher => "Rocket Launcher",
            WeaponId::Machinegun => "Machinegun",
            WeaponId::Chaingun => "Chaingun",
            WeaponId::SuperShotgun => "Super Shotgun",
            WeaponId::Hyperblaster => "Hyperblaster",
            WeaponId::Bfg => "BFG",
            WeaponId::Grenade => "Grenade",
            WeaponId::Telefrag => "Telefrag",
            WeaponId::Shotgun => "Shotgun",
            WeaponId::Blaster => "Blaster",
        }
    }

    /// Parse a display name back into a weapon identity.
    ///
    /// Annotation lines carry weapon names as free text; anything that is
    /// not an exact display name is rejected.
    pub fn from_name(name: &str) -> Option<WeaponId> {
        WeaponId::ALL.iter().copied().find(|w| w.name() == name)
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
