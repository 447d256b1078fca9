/// Implements `as_str`, `Display` and `FromStr` for a closed enumeration from
/// its variant to wire name table. Parsing ignores ASCII case and underscores,
/// so both `CAR_HOV` and `carHOV` resolve to the same variant.
macro_rules! impl_wire_name {
    ($name:ident, $label:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|variant| $crate::wire_name::matches_wire_name(s, variant.as_str()))
                    .ok_or_else(|| $crate::error::ParseEnumError::new($label, s))
            }
        }
    };
}

pub(crate) use impl_wire_name;

pub(crate) fn matches_wire_name(candidate: &str, wire: &str) -> bool {
    let mut candidate = candidate.chars().filter(|c| *c != '_');
    let mut wire = wire.chars().filter(|c| *c != '_');

    loop {
        match (candidate.next(), wire.next()) {
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}
