//! Conversions between RGB and the 0-255 HSV domain used by colour bands

/// Convert an RGB pixel to `[h, s, v]` with every channel in 0-255.
///
/// Hue covers the whole circle, so 0° maps to 0 and 360° would map to 256.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (max - min) as i32;

    let v = max;
    if delta == 0 {
        return [0, 0, v];
    }

    let s = ((255 * delta + max as i32 / 2) / max as i32) as u8;

    let (r, g, b) = (r as i32, g as i32, b as i32);
    // hue in sixths of the circle, scaled by delta
    let h6 = if max as i32 == r {
        g - b
    } else if max as i32 == g {
        2 * delta + (b - r)
    } else {
        4 * delta + (r - g)
    };
    let h6 = h6.rem_euclid(6 * delta);
    let h = ((h6 * 256 + 3 * delta) / (6 * delta)) % 256;

    [h as u8, s, v]
}

/// Convert a 0-255 `[h, s, v]` triple back to RGB
pub fn hsv_to_rgb(h: u8, s: u8, v: u8) -> [u8; 3] {
    if s == 0 {
        return [v, v, v];
    }

    let hue = h as f32 * 6.0 / 256.0;
    let sector = hue.floor();
    let frac = hue - sector;
    let v_f = v as f32;
    let s_f = s as f32 / 255.0;

    let p = v_f * (1.0 - s_f);
    let q = v_f * (1.0 - s_f * frac);
    let t = v_f * (1.0 - s_f * (1.0 - frac));

    let (r, g, b) = match sector as u8 {
        0 => (v_f, t, p),
        1 => (q, v_f, p),
        2 => (p, v_f, t),
        3 => (p, q, v_f),
        4 => (t, p, v_f),
        _ => (v_f, p, q),
    };

    [clamp_color(r.round() as i32), clamp_color(g.round() as i32), clamp_color(b.round() as i32)]
}

/// Clamp an integer into a valid 8-bit colour channel
pub fn clamp_color(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
