mod contact;
mod menu;
mod order;
mod reservation;
mod rollover;
mod sequence;

pub use self::contact::ContactRepository;
pub use self::menu::MenuRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::reservation::ReservationRepository;
pub use self::rollover::PostgresRolloverStore;
pub use self::sequence::PostgresSequenceStore;
