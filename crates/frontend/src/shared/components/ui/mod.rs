pub mod button;
pub mod checkbox;
pub mod field_label;
pub mod input;
pub mod select;
pub mod tag_input;
pub mod textarea;

pub use button::Button;
pub use checkbox::Checkbox;
pub use field_label::FieldLabel;
pub use input::Input;
pub use select::Select;
pub use tag_input::TagInput;
pub use textarea::Textarea;
