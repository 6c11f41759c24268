//! Process-local stores backing `STORAGE_BACKEND=memory` and the tests.
//! Only the order sequence can outlive the process, through its snapshot file.

mod contact;
mod menu;
mod order;
mod reservation;
mod rollover;
mod sequence;

pub use self::contact::InMemoryContactStore;
pub use self::menu::InMemoryMenuStore;
pub use self::order::InMemoryOrderStore;
pub use self::reservation::InMemoryReservationStore;
pub use self::rollover::InMemoryRolloverStore;
pub use self::sequence::InMemorySequenceStore;
