#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    UltraSmall,
    Small,
    Mobile,
    Tablet,
    Laptop,
    Desktop,
}

/// Decorative elements that drift toward the centre while the welcome
/// section shrinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeftVideo,
    TopRightVideo,
    Headline,
    SocialLinks,
}

impl Anchor {
    fn travel(self) -> (f64, f64) {
        match self {
            Anchor::TopLeftVideo => (200.0, 150.0),
            Anchor::TopRightVideo => (-200.0, 150.0),
            Anchor::Headline => (100.0, -50.0),
            Anchor::SocialLinks => (-150.0, -100.0),
        }
    }
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width.is_nan() || width < 360.0 {
            Breakpoint::UltraSmall
        } else if width < 480.0 {
            Breakpoint::Small
        } else if width < 768.0 {
            Breakpoint::Mobile
        } else if width < 1024.0 {
            Breakpoint::Tablet
        } else if width < 1440.0 {
            Breakpoint::Laptop
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn displacement(self) -> Displacement {
        let multiplier = match self {
            Breakpoint::UltraSmall => 0.25,
            Breakpoint::Small => 0.35,
            Breakpoint::Mobile => 0.5,
            Breakpoint::Tablet => 0.7,
            Breakpoint::Laptop => 0.85,
            Breakpoint::Desktop => 1.0,
        };
        Displacement { multiplier }
    }

    pub fn headline_font_rem(self) -> f64 {
        match self {
            Breakpoint::UltraSmall => 3.5,
            Breakpoint::Small => 5.0,
            Breakpoint::Mobile => 8.0,
            Breakpoint::Tablet => 12.0,
            Breakpoint::Laptop | Breakpoint::Desktop => 15.0,
        }
    }

    pub fn is_compact(self) -> bool {
        matches!(self, Breakpoint::UltraSmall | Breakpoint::Small | Breakpoint::Mobile)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displacement {
    pub multiplier: f64,
}

impl Displacement {
    pub fn offset(self, anchor: Anchor, shrink_progress: f64) -> (f64, f64) {
        let (dx, dy) = anchor.travel();
        let k = shrink_progress * self.multiplier;
        (dx * k, dy * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_map_to_buckets_at_boundaries() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::UltraSmall);
        assert_eq!(Breakpoint::from_width(360.0), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(479.9), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(480.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Laptop);
        assert_eq!(Breakpoint::from_width(1440.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(3840.0), Breakpoint::Desktop);
    }

    #[test]
    fn junk_widths_do_not_panic() {
        assert_eq!(Breakpoint::from_width(-1.0), Breakpoint::UltraSmall);
        assert_eq!(Breakpoint::from_width(f64::NAN), Breakpoint::UltraSmall);
        assert_eq!(Breakpoint::from_width(f64::INFINITY), Breakpoint::Desktop);
    }

    #[test]
    fn no_displacement_before_shrinking() {
        let d = Breakpoint::Desktop.displacement();
        assert_eq!(d.offset(Anchor::TopLeftVideo, 0.0), (0.0, 0.0));
    }

    #[test]
    fn desktop_uses_full_travel() {
        let d = Breakpoint::Desktop.displacement();
        assert_eq!(d.offset(Anchor::TopLeftVideo, 1.0), (200.0, 150.0));
        assert_eq!(d.offset(Anchor::SocialLinks, 0.5), (-75.0, -50.0));
    }

    #[test]
    fn smaller_screens_travel_less() {
        let buckets = [
            Breakpoint::UltraSmall,
            Breakpoint::Small,
            Breakpoint::Mobile,
            Breakpoint::Tablet,
            Breakpoint::Laptop,
            Breakpoint::Desktop,
        ];
        for pair in buckets.windows(2) {
            let (small, _) = pair[0].displacement().offset(Anchor::Headline, 1.0);
            let (large, _) = pair[1].displacement().offset(Anchor::Headline, 1.0);
            assert!(small < large, "{:?} should travel less than {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn compact_buckets() {
        assert!(Breakpoint::Mobile.is_compact());
        assert!(!Breakpoint::Tablet.is_compact());
    }
}
