// Static bubble configuration. Descriptors are defined once and never mutated.

/// Colour family of a bubble; maps 1:1 onto a stylesheet class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Purple,
    Turq,
    Soft,
}

impl Variant {
    pub fn class_name(self) -> &'static str {
        match self {
            Variant::Purple => "purple",
            Variant::Turq => "turq",
            Variant::Soft => "soft",
        }
    }
}

pub const FALLBACK_BUBBLE_LABEL: &str = "decorative bubble";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleDescriptor {
    /// Panel id this bubble navigates to.
    pub id: &'static str,
    /// Visible label; empty for purely decorative bubbles.
    pub label: &'static str,
    pub variant: Variant,
    /// Edge length of the square bubble box in CSS px.
    pub size: f32,
}

impl BubbleDescriptor {
    #[inline]
    pub fn is_decorative(&self) -> bool {
        self.label.is_empty()
    }

    #[inline]
    pub fn aria_label(&self) -> &'static str {
        if self.is_decorative() {
            FALLBACK_BUBBLE_LABEL
        } else {
            self.label
        }
    }

    pub fn class_list(&self) -> String {
        format!("bubble {}", self.variant.class_name())
    }
}

pub const BUBBLE_CONFIG: [BubbleDescriptor; 6] = [
    BubbleDescriptor {
        id: "home",
        label: "Home",
        variant: Variant::Purple,
        size: 92.0,
    },
    BubbleDescriptor {
        id: "services",
        label: "Services",
        variant: Variant::Turq,
        size: 120.0,
    },
    BubbleDescriptor {
        id: "projects",
        label: "Projects",
        variant: Variant::Soft,
        size: 100.0,
    },
    BubbleDescriptor {
        id: "Contact Us",
        label: "Contact Us",
        variant: Variant::Purple,
        size: 78.0,
    },
    // small decorative bubbles
    BubbleDescriptor {
        id: "mini-1",
        label: "",
        variant: Variant::Turq,
        size: 42.0,
    },
    BubbleDescriptor {
        id: "mini-2",
        label: "",
        variant: Variant::Purple,
        size: 34.0,
    },
];
