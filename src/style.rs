//! Avatar presentation styling.
//!
//! Maps the page-level avatar settings (size, shape, alignment) to the inline
//! CSS carried by each author's `<img>` tag, plus a placement mode telling the
//! renderer how to lay the image out:
//!
//! - **Centered** avatars sit in their own centered block above the author's
//!   fields.
//! - **Floated** avatars (left/right) sit inline among the fields and need a
//!   clearing element after them so the next author starts below the float.
//!
//! Unrecognized shape or alignment strings fall back to the defaults
//! (`square`, `center`) instead of being rejected. Sizes are used verbatim,
//! including non-positive values — no clamping.

/// How the avatar image is placed relative to the author's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Floated left or right. The renderer must emit a clearing element after
    /// the author's fields.
    Float,
    /// Centered in its own block before the fields. No clearing element.
    Centered,
}

/// Avatar crop shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarShape {
    #[default]
    Square,
    Circle,
}

impl AvatarShape {
    /// Parse a source value. Anything other than `"circle"` is `Square`.
    pub fn parse(value: &str) -> Self {
        match value {
            "circle" => Self::Circle,
            _ => Self::Square,
        }
    }
}

/// Avatar alignment within the author block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarAlign {
    Left,
    Right,
    #[default]
    Center,
}

impl AvatarAlign {
    /// Parse a source value. Anything other than `"left"` or `"right"` is
    /// `Center`.
    pub fn parse(value: &str) -> Self {
        match value {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Center,
        }
    }
}

/// Build the inline style string and placement mode for an avatar image.
///
/// The style always carries the exact size (`width`/`height` in px) and
/// `object-fit:cover` so non-square sources crop rather than distort.
pub fn avatar_style(size: i64, shape: AvatarShape, align: AvatarAlign) -> (String, Placement) {
    let mut style = format!("width:{size}px; height:{size}px; object-fit:cover;");

    match shape {
        AvatarShape::Circle => style.push_str(" border-radius:50%;"),
        AvatarShape::Square => style.push_str(" border-radius:0;"),
    }

    let placement = match align {
        AvatarAlign::Left => {
            style.push_str(" float:left; margin-right:15px; margin-bottom:10px;");
            Placement::Float
        }
        AvatarAlign::Right => {
            style.push_str(" float:right; margin-left:15px; margin-bottom:10px;");
            Placement::Float
        }
        AvatarAlign::Center => {
            style.push_str(" display:block; margin:0 auto 10px auto;");
            Placement::Centered
        }
    };

    (style, placement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_style_carries_size_verbatim() {
        let (style, _) = avatar_style(140, AvatarShape::Square, AvatarAlign::Center);
        assert!(style.starts_with("width:140px; height:140px; object-fit:cover;"));
    }

    #[test]
    fn non_positive_size_is_not_clamped() {
        let (style, _) = avatar_style(-5, AvatarShape::Square, AvatarAlign::Center);
        assert!(style.contains("width:-5px; height:-5px;"));
    }

    #[test]
    fn circle_shape_rounds_corners() {
        let (style, _) = avatar_style(100, AvatarShape::Circle, AvatarAlign::Center);
        assert!(style.contains("border-radius:50%;"));
    }

    #[test]
    fn square_shape_keeps_corners() {
        let (style, _) = avatar_style(100, AvatarShape::Square, AvatarAlign::Center);
        assert!(style.contains("border-radius:0;"));
    }

    #[test]
    fn left_align_floats_and_needs_clear() {
        let (style, placement) = avatar_style(100, AvatarShape::Square, AvatarAlign::Left);
        assert!(style.contains("float:left; margin-right:15px; margin-bottom:10px;"));
        assert_eq!(placement, Placement::Float);
    }

    #[test]
    fn right_align_floats_and_needs_clear() {
        let (style, placement) = avatar_style(100, AvatarShape::Square, AvatarAlign::Right);
        assert!(style.contains("float:right; margin-left:15px; margin-bottom:10px;"));
        assert_eq!(placement, Placement::Float);
    }

    #[test]
    fn center_align_is_a_block() {
        let (style, placement) = avatar_style(100, AvatarShape::Square, AvatarAlign::Center);
        assert!(style.contains("display:block; margin:0 auto 10px auto;"));
        assert_eq!(placement, Placement::Centered);
    }

    #[test]
    fn unknown_shape_falls_back_to_square() {
        assert_eq!(AvatarShape::parse("hexagon"), AvatarShape::Square);
        assert_eq!(AvatarShape::parse(""), AvatarShape::Square);
        assert_eq!(AvatarShape::parse("Circle"), AvatarShape::Square);
    }

    #[test]
    fn known_shapes_parse() {
        assert_eq!(AvatarShape::parse("circle"), AvatarShape::Circle);
        assert_eq!(AvatarShape::parse("square"), AvatarShape::Square);
    }

    #[test]
    fn unknown_align_falls_back_to_center() {
        assert_eq!(AvatarAlign::parse("middle"), AvatarAlign::Center);
        assert_eq!(AvatarAlign::parse(""), AvatarAlign::Center);
        assert_eq!(AvatarAlign::parse("Left"), AvatarAlign::Center);
    }

    #[test]
    fn known_aligns_parse() {
        assert_eq!(AvatarAlign::parse("left"), AvatarAlign::Left);
        assert_eq!(AvatarAlign::parse("right"), AvatarAlign::Right);
        assert_eq!(AvatarAlign::parse("center"), AvatarAlign::Center);
    }

    #[test]
    fn full_style_segment_order() {
        let (style, _) = avatar_style(100, AvatarShape::Circle, AvatarAlign::Left);
        assert_eq!(
            style,
            "width:100px; height:100px; object-fit:cover; border-radius:50%; \
             float:left; margin-right:15px; margin-bottom:10px;"
        );
    }
}
