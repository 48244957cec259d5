//! Fixed color palettes, one list per semantic role.
//!
//! Every color a composition pass can choose comes from one of these
//! lists; a palette draw is an index draw into the matching slice.

use super::raster::Rgb;

/// Skin tones for the head block and neck stub.
pub const SKIN: [Rgb; 5] = [
    Rgb::from_u32(0xFF_D8AF),
    Rgb::from_u32(0xF1_BF95),
    Rgb::from_u32(0xE3_A37B),
    Rgb::from_u32(0xCD_8B62),
    Rgb::from_u32(0xB9_774F),
];

/// Hair colors.
pub const HAIR: [Rgb; 5] = [
    Rgb::from_u32(0x12_1622),
    Rgb::from_u32(0x3E_2C22),
    Rgb::from_u32(0x2B_3C5F),
    Rgb::from_u32(0x5A_2D36),
    Rgb::from_u32(0x2F_2F2F),
];

/// Garment (torso) colors.
pub const GARMENT: [Rgb; 5] = [
    Rgb::from_u32(0x4A_E0D2),
    Rgb::from_u32(0x60_A8FF),
    Rgb::from_u32(0xF4_B85C),
    Rgb::from_u32(0x77_D66E),
    Rgb::from_u32(0xFF_8AA0),
];

/// Garment shadow colors, used for the shading strip and sleeve bands.
pub const GARMENT_SHADOW: [Rgb; 5] = [
    Rgb::from_u32(0x2E_97B0),
    Rgb::from_u32(0x3D_6CAE),
    Rgb::from_u32(0xD7_9745),
    Rgb::from_u32(0x4D_9A4A),
    Rgb::from_u32(0xBE_4F65),
];

/// Pants colors.
pub const PANTS: [Rgb; 4] = [
    Rgb::from_u32(0x25_334D),
    Rgb::from_u32(0x2C_2C3A),
    Rgb::from_u32(0x4A_2F3D),
    Rgb::from_u32(0x1F_3F36),
];

/// Eye colors.
pub const EYE: [Rgb; 3] = [
    Rgb::from_u32(0x07_111F),
    Rgb::from_u32(0x0F_1F34),
    Rgb::from_u32(0x11_1111),
];

/// Accessory colors.
pub const ACCESSORY: [Rgb; 4] = [
    Rgb::from_u32(0xD8_EEFF),
    Rgb::from_u32(0xFF_DCA8),
    Rgb::from_u32(0xBB_FFDE),
    Rgb::from_u32(0xF6_C6FF),
];

/// Deep background tones, used for the base fill.
pub const BACKGROUND_DEEP: [Rgb; 3] = [
    Rgb::from_u32(0x07_0F1D),
    Rgb::from_u32(0x0D_1627),
    Rgb::from_u32(0x0D_1F2E),
];

/// Hazy background tones, used for the noise speckle.
pub const BACKGROUND_HAZE: [Rgb; 3] = [
    Rgb::from_u32(0x1C_2F4D),
    Rgb::from_u32(0x13_445C),
    Rgb::from_u32(0x37_2F5B),
];

/// Mouth colors.
pub const MOUTH: [Rgb; 3] = [
    Rgb::from_u32(0xA8_5C47),
    Rgb::from_u32(0x8C_4A3B),
    Rgb::from_u32(0x70_403A),
];

/// Decorative foreground speckle colors.
pub const SPECKLE: [Rgb; 4] = [
    Rgb::from_u32(0x4A_E0D2),
    Rgb::from_u32(0x60_A8FF),
    Rgb::from_u32(0xCF_E8FF),
    Rgb::from_u32(0xFF_FFFF),
];

/// Cool blue used for the brighter half of the background noise.
pub const STARLIGHT: Rgb = Rgb::from_u32(0x8C_B9FF);

/// Color of the radial highlight overlay.
pub const GLOW: Rgb = Rgb::from_u32(0x60_A8FF);
