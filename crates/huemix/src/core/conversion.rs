use crate::Float;

/// Convert 24-bit RGB coordinates to HSL coordinates.
///
/// The hue is in degrees `0..360`, saturation and lightness are percentages
/// `0..=100`, and all three coordinates are rounded to the nearest integer
/// value. The achromatic case yields a hue and saturation of zero.
pub(crate) fn rgb_to_hsl(r: u8, g: u8, b: u8) -> [Float; 3] {
    let r = r as Float / 255.0;
    let g = g as Float / 255.0;
    let b = b as Float / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return [0.0, 0.0, (l * 100.0).round()];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Hue in sixths, keyed on the maximal channel.
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [
        (h / 6.0 * 360.0).round(),
        (s * 100.0).round(),
        (l * 100.0).round(),
    ]
}

/// Convert HSL coordinates to 24-bit RGB coordinates.
///
/// The hue must be in degrees, saturation and lightness must be percentages
/// `0..=100`. Each channel is rounded to the nearest integer. Zero
/// saturation short-circuits to the gray with the given lightness.
pub(crate) fn hsl_to_rgb(h: Float, s: Float, l: Float) -> [u8; 3] {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let gray = (l * 255.0).round() as u8;
        return [gray; 3];
    }

    let q = if l < 0.5 {
        l.mul_add(s, l)
    } else {
        l.mul_add(-s, l + s)
    };
    let p = l.mul_add(2.0, -q);

    [
        (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    ]
}

/// Map the given hue offset to one RGB channel.
///
/// `p` and `q` are the lower and upper chroma bounds of the color; `t` is
/// the channel's hue offset, wrapped into unit range before dispatching
/// into the four linear regions of the HSL model.
fn hue_to_rgb(p: Float, q: Float, t: Float) -> Float {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Wrap the given hue into `0..360` degrees.
#[inline]
pub(crate) fn wrap_hue(h: Float) -> Float {
    h.rem_euclid(360.0)
}

/// Clamp the given percentage into `0..=100`.
#[inline]
pub(crate) fn clamp_percent(value: Float) -> Float {
    value.clamp(0.0, 100.0)
}

// ====================================================================================================================
