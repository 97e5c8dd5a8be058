//! Macros for reducing boilerplate in widget builders.

/// Generates a builder-style setter for a field.
///
/// ```ignore
/// builder_field!(font_size, f32);
/// // pub fn font_size(mut self, value: f32) -> Self { self.font_size = value; self }
/// ```
#[macro_export]
macro_rules! builder_field {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
    ($method:ident, $field:ident, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$field = value;
            self
        }
    };
}

/// Generates a builder-style setter for an `Option` field.
#[macro_export]
macro_rules! builder_option {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = Some(value);
            self
        }
    };
}

/// Generates a setter for a message-producing [`Callback`](crate::Callback)
/// field. The widget's message type parameter must be named `M`.
///
/// ```ignore
/// callback_setter!(on_state_change, ComboboxWidgetState);
/// // pub fn on_state_change<F>(mut self, f: F) -> Self where F: Fn(ComboboxWidgetState) -> M + 'static
/// ```
#[macro_export]
macro_rules! callback_setter {
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($param) -> M + 'static,
        {
            self.$name = $crate::Callback::new(f);
            self
        }
    };
}

/// Generates a setter for a [`SideEffect`](crate::SideEffect) field.
#[macro_export]
macro_rules! side_effect_setter {
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($param) + 'static,
        {
            self.$name = $crate::SideEffect::new(f);
            self
        }
    };
}
