//! Macros for declaring closed value sets.

/// Declare a fieldless enum usable as a state, event or side effect.
///
/// The generated enum derives everything the engine needs
/// (`Clone, Copy, PartialEq, Eq, Hash, Debug`) plus serde support for
/// JSON transition tables, and gets a `name()` accessor and `Display`.
///
/// # Example
///
/// ```
/// use tabula::state_enum;
///
/// state_enum! {
///     pub enum PlayerState {
///         Stopped,
///         Playing,
///         Paused,
///     }
/// }
///
/// assert_eq!(PlayerState::Paused.name(), "Paused");
/// assert_eq!(PlayerState::Playing.to_string(), "Playing");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Variant name, as written in the declaration.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
