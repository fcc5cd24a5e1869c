mod meal;
mod restaurant;
mod rfid;

pub use meal::*;
pub use restaurant::*;
pub use rfid::*;
