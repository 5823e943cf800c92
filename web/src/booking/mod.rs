pub mod contact;
pub mod dates;
pub mod flow;
pub mod gallery;
pub mod guests;
pub mod rates;

// Re-export commonly used types
pub use contact::{ContactDetails, CountryCode};
pub use dates::StayDates;
pub use flow::BookingFlow;
pub use gallery::GalleryCycle;
pub use guests::GuestCount;
pub use rates::{PriceQuote, RateTable};
