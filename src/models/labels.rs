use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input matched neither a variant label nor a constant name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed enum where every variant maps to a constant name
/// (`OFF_ROAD`) and a display label (`Off-road`).
///
/// Serde writes the label and reads either form. `FromStr` is the lenient
/// path: it also ignores ASCII case and surrounding whitespace.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($constant:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label, alias = $constant)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable label
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Upper-case constant name used in summaries
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $constant,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.label().eq_ignore_ascii_case(wanted) || v.name().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| ParseLabelError {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

labelled_enum! {
    /// Physical condition of the bike
    Condition {
        New => ("NEW", "New"),
        Excellent => ("EXCELLENT", "Excellent"),
        Good => ("GOOD", "Good"),
        Fair => ("FAIR", "Fair"),
        Poor => ("POOR", "Poor"),
    }
}

labelled_enum! {
    /// Fuel the bike runs on
    FuelType {
        Petrol => ("PETROL", "Petrol"),
        Diesel => ("DIESEL", "Diesel"),
        Electric => ("ELECTRIC", "Electric"),
        Hybrid => ("HYBRID", "Hybrid"),
    }
}

labelled_enum! {
    /// Market segment the listing is filed under
    Category {
        Sport => ("SPORT", "Sport"),
        Cruiser => ("CRUISER", "Cruiser"),
        Touring => ("TOURING", "Touring"),
        OffRoad => ("OFF_ROAD", "Off-road"),
        Scooter => ("SCOOTER", "Scooter"),
        Electric => ("ELECTRIC", "Electric"),
        Vintage => ("VINTAGE", "Vintage"),
        Other => ("OTHER", "Other"),
    }
}
