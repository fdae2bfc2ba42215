#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    ZhCn,
    En,
}

impl Locale {
    /// Accepts BCP 47 style tags case-insensitively; `zh`, `zh-CN` and `zh_CN` all map to `ZhCn`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh" | "zh-cn" | "zh-hans" => Some(Self::ZhCn),
            "en" | "en-us" | "en-gb" => Some(Self::En),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::En => "en",
        }
    }

    pub fn copy(self) -> &'static PageCopy {
        match self {
            Self::ZhCn => &ZH_CN,
            Self::En => &EN,
        }
    }
}

/// Fixed text of the pricing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCopy {
    pub title: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
    pub period: &'static str,
    pub cta: &'static str,
    pub toast_message: &'static str,
    pub check: &'static str,
}

static ZH_CN: PageCopy = PageCopy {
    title: "定价方案",
    heading: "选择适合您的定价方案",
    subtitle: "根据您的需求选择合适的套餐，满足个人、团队或企业的不同需求",
    badge: "最受欢迎",
    period: "/月",
    cta: "立即开始",
    toast_message: "功能正在开发中",
    check: "✓",
};

static EN: PageCopy = PageCopy {
    title: "Pricing",
    heading: "Choose the plan that fits you",
    subtitle: "Pick the package that matches your needs, whether you are an individual, a team or an enterprise",
    badge: "Most popular",
    period: "/month",
    cta: "Get started",
    toast_message: "This feature is under development",
    check: "✓",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("zh-CN"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_tag("zh_cn"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_tag(" EN "), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_tag_round_trips() {
        for locale in [Locale::ZhCn, Locale::En] {
            assert_eq!(Locale::from_tag(locale.tag()), Some(locale));
        }
    }

    #[test]
    fn test_default_copy_matches_published_page() {
        let copy = Locale::default().copy();
        assert_eq!(copy.title, "定价方案");
        assert_eq!(copy.badge, "最受欢迎");
        assert_eq!(copy.period, "/月");
        assert_eq!(Locale::En.copy().period, "/month");
    }
}
