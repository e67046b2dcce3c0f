//! Opaque asset locations. Nothing in the engine looks inside these strings.

pub mod stickers {
    pub const HAPPY: &str = "public/Happy.png";
    pub const SAD: &str = "public/Sad.png";
    pub const CONFIRMATION: &str = "public/Confirmation.png";
    pub const OOPS: &str = "public/Oops.png";
}

pub mod snoopy {
    pub const WALKING: &str = "public/WALKING.png";
    pub const BIKING: &str = "public/RIDING.png";
    pub const FLYING: &str = "public/FLYING.png";
}
