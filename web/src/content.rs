//! Hard-coded content for the one listing this site markets: image list,
//! amenity/highlight/policy copy, share targets. The widgets consume these
//! as injected configuration and never compute any of it.

use shared_types::{Amenity, Highlight, ListingInfo, PolicyItem, ShareTarget};

pub fn listing_info() -> ListingInfo {
    ListingInfo {
        name: "Luxurious Suite at Case de Silver".to_string(),
        suite_name: "Luxury Suite by Silver Group".to_string(),
        rating: 4.9,
        review_count: 284,
        locality: "Tathwade".to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        map_embed_url: "https://www.google.com/maps/embed?pb=!4v1744213318362!6m8!1m7!1sCAoSFkNJSE0wb2dLRUlDQWdJRE43N3pTVUE.!2m2!1d18.62283539903247!2d73.75837717264945!3f0!4f0!5f0.7820865974627469".to_string(),
        host_avatar_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQOtqlbS-7QfT4Y8Xs-4ba4fGN0aBRhnIJiAA&s".to_string(),
        bedrooms: 1,
        baths: 1,
        room_type: "Classic Room".to_string(),
    }
}

pub fn gallery_images() -> Vec<String> {
    vec![
        "https://images.unsplash.com/photo-1566665797739-1674de7a421a?w=800".to_string(),
        "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=800".to_string(),
        "https://images.unsplash.com/photo-1590490360182-c33d57733427?w=800".to_string(),
        "https://images.unsplash.com/photo-1584132967334-10e028bd69f7?w=800".to_string(),
        "https://images.unsplash.com/photo-1578683010236-d716f9a3f461?w=800".to_string(),
    ]
}

pub fn amenities() -> Vec<Amenity> {
    [
        ("📶", "High-speed WiFi"),
        ("❄️", "Climate control"),
        ("🚗", "Valet parking"),
        ("🏊", "Infinity pool"),
        ("🍸", "Mini bar"),
        ("📺", "65\" Smart TV"),
        ("🍳", "Kitchenette"),
        ("🛎️", "24/7 concierge"),
        ("🧺", "Laundry service"),
        ("💆", "Spa access"),
        ("🍽️", "Room service"),
        ("🍹", "Lounge access"),
    ]
    .into_iter()
    .map(|(icon, label)| Amenity {
        icon: icon.to_string(),
        label: label.to_string(),
    })
    .collect()
}

pub fn highlights() -> Vec<Highlight> {
    [
        (
            "Luxury Experience",
            "Premium amenities and personalized service",
        ),
        (
            "Prime Location",
            "Heart of Tathwade, minutes from IT hubs",
        ),
        (
            "Dining Excellence",
            "24/7 in-room dining and restaurant",
        ),
        (
            "Business Ready",
            "High-speed internet and workspace",
        ),
    ]
    .into_iter()
    .map(|(title, description)| Highlight {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn policies() -> Vec<PolicyItem> {
    [
        ("💳", "Secure payments with all major cards accepted"),
        ("🔑", "Digital check-in available 24/7"),
        ("🛡️", "Free cancellation up to 48 hours before check-in"),
    ]
    .into_iter()
    .map(|(icon, text)| PolicyItem {
        icon: icon.to_string(),
        text: text.to_string(),
    })
    .collect()
}

pub fn share_targets() -> Vec<ShareTarget> {
    [
        (
            "💬",
            "WhatsApp",
            "https://wa.me/?text=",
            "https://www.whatsapp.com",
        ),
        (
            "📘",
            "Facebook",
            "https://www.facebook.com/sharer/sharer.php?u=",
            "https://www.facebook.com",
        ),
        (
            "🐦",
            "Twitter",
            "https://twitter.com/intent/tweet?text=",
            "https://twitter.com",
        ),
        // Instagram has no web share intent; the tile links to the profile.
        ("📸", "Instagram", "", "https://www.instagram.com"),
    ]
    .into_iter()
    .map(|(icon, name, share_url, fallback_url)| ShareTarget {
        icon: icon.to_string(),
        name: name.to_string(),
        share_url: share_url.to_string(),
        fallback_url: fallback_url.to_string(),
    })
    .collect()
}
