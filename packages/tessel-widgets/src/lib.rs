pub mod assets;
pub mod classes;
pub mod counter;
pub mod error;
pub mod grouping;
pub mod icon;
pub mod options;
pub mod update;

pub use assets::{COUNTER_SCRIPT, counter_dependency, fomantic_dependency};
pub use classes::join_classes;
pub use counter::{CounterButton, CounterHandle};
pub use error::WidgetError;
pub use grouping::{DigitGrouping, LabelValue, group_digits};
pub use icon::Icon;
pub use options::CounterOptions;
pub use update::{CounterUpdate, CounterUpdateMessage, update_counter_button};
