// Widget implementations

mod combobox;

pub use self::combobox::{combobox, Combobox, ComboboxGeometry};
