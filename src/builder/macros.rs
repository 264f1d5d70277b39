//! Macros for ergonomic state and trigger declarations.

/// Generate a `State` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use flywheel::state_enum;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///     }
/// }
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
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
        }
    };
}

/// Generate a `Trigger` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use flywheel::trigger_enum;
///
/// trigger_enum! {
///     pub enum WorkflowTrigger {
///         Submit,
///         Approve,
///     }
/// }
/// ```
#[macro_export]
macro_rules! trigger_enum {
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Trigger for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
