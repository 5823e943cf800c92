pub mod booking_modal;
pub mod confirmation_modal;
pub mod gallery_modal;
pub mod hero_map;
pub mod info_tabs;
pub mod listing_header;
pub mod reserve_card;
pub mod share_modal;
pub mod wishlist_button;

// Re-export commonly used types
pub use booking_modal::BookingModal;
pub use confirmation_modal::ConfirmationModal;
pub use gallery_modal::GalleryModal;
pub use hero_map::HeroMap;
pub use info_tabs::{InfoTab, InfoTabs};
pub use listing_header::ListingHeader;
pub use reserve_card::ReserveCard;
pub use share_modal::ShareModal;
pub use wishlist_button::WishlistButton;
