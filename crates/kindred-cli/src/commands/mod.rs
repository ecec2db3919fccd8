//! Command implementations.

pub mod pairs;
pub mod people;
pub mod relate;
pub mod settings;
pub mod validate;

pub use self::pairs::execute_pairs;
pub use self::people::execute_people;
pub use self::relate::execute_relate;
pub use self::settings::execute_settings;
pub use self::validate::execute_validate;
