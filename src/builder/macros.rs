//! Macros for ergonomic automaton construction.

/// Generate a `State` implementation for simple enums.
///
/// The enum also derives `Copy` and `Eq`, since its variants carry no data.
///
/// # Example
///
/// ```
/// use automata::core::State;
/// use automata::state_enum;
///
/// state_enum! {
///     pub enum Parity {
///         Even,
///         Odd,
///     }
///     accepting: [Even]
/// }
///
/// assert_eq!(Parity::Odd.name(), "Odd");
/// assert!(Parity::Even.is_accepting());
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

        $(accepting: [$($accepting:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_accepting(&self) -> bool {
                match self {
                    $($(Self::$accepting => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
