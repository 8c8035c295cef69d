//! QR code for the join URL, so a printed sign can send phones to the form.

use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use shared_types::JoinError;

/// Side length of one module, in SVG user units.
pub const MODULE_SIZE: u32 = 10;

/// Light modules around the symbol on each side.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Encode `url` at the lowest error-correction level, growing the symbol
/// version as far as the data needs.
pub fn encode_join_url(url: &str) -> Result<QrCode, JoinError> {
    QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)
        .map_err(|e| JoinError::qr_encoding(format!("cannot encode `{url}`: {e}")))
}

/// Render `url` as a black-on-white SVG document.
pub fn join_qr_svg(url: &str) -> Result<String, JoinError> {
    let code = encode_join_url(url)?;
    Ok(code
        .render::<svg::Color<'_>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}
