use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident($inner:ty), $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub $inner);

        impl $name {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Account-level player identifier; every session and run is owned by one.
    PlayerId(u64),
    "player"
);
id_type!(
    /// Monster template identifier (static content).
    MonsterId(u32),
    "monster"
);
id_type!(
    /// Item template identifier (static content).
    ItemId(u32),
    "item"
);
id_type!(
    /// Dungeon template identifier (static content).
    DungeonId(u32),
    "dungeon"
);
id_type!(
    /// Kingdom that owns a dungeon loot store partition.
    KingdomId(u32),
    "kingdom"
);
id_type!(
    /// Encounter session identifier, unique per store.
    SessionId(u64),
    "session"
);
id_type!(
    /// Dungeon run identifier, unique per store.
    RunId(u64),
    "run"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind() {
        assert_eq!(PlayerId(7).to_string(), "player#7");
        assert_eq!(MonsterId::new(3).to_string(), "monster#3");
        assert_eq!(KingdomId::from(2).get(), 2);
    }
}
