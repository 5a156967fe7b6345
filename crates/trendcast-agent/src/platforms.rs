//! Distribution channels every topic gets a plan for, and their constraints.

/// A target distribution platform.
///
/// [`Platform::ALL`] is the configured set, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    LinkedIn,
    TikTok,
    YouTubeShorts,
    Pinterest,
    Instagram,
    Facebook,
    GoogleSearch,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::LinkedIn,
        Platform::TikTok,
        Platform::YouTubeShorts,
        Platform::Pinterest,
        Platform::Instagram,
        Platform::Facebook,
        Platform::GoogleSearch,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::TikTok => "tiktok",
            Platform::YouTubeShorts => "youtube-shorts",
            Platform::Pinterest => "pinterest",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::GoogleSearch => "google-search",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::TikTok => "TikTok",
            Platform::YouTubeShorts => "YouTube Shorts",
            Platform::Pinterest => "Pinterest",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::GoogleSearch => "Google Search",
        }
    }

    #[must_use]
    pub fn kpi(self) -> &'static str {
        match self {
            Platform::LinkedIn => "Qualified profile visits and DM conversations per post",
            Platform::TikTok => "3-second hold rate and follows per 1,000 views",
            Platform::YouTubeShorts => "Average view duration and subscribers gained",
            Platform::Pinterest => "Outbound clicks and pin saves",
            Platform::Instagram => "Saves, shares and link-in-bio taps",
            Platform::Facebook => "Group joins and comment threads started",
            Platform::GoogleSearch => "Organic impressions and click-through rate",
        }
    }

    /// Character ceiling for short-form copy, including any ellipsis.
    #[must_use]
    pub fn short_copy_limit(self) -> usize {
        match self {
            Platform::LinkedIn => 210,
            Platform::TikTok => 150,
            Platform::YouTubeShorts | Platform::Pinterest => 100,
            Platform::Instagram | Platform::Facebook => 125,
            Platform::GoogleSearch => 90,
        }
    }

    #[must_use]
    pub fn hashtag_limit(self) -> usize {
        match self {
            Platform::LinkedIn | Platform::TikTok => 5,
            Platform::YouTubeShorts => 3,
            Platform::Pinterest => 4,
            Platform::Instagram => 10,
            Platform::Facebook => 3,
            Platform::GoogleSearch => 2,
        }
    }

    /// When this platform's audience is most receptive.
    #[must_use]
    pub fn posting_window(self) -> &'static str {
        match self {
            Platform::LinkedIn => {
                "Tue-Thu 08:00-10:00 local, when operators check the feed before meetings"
            }
            Platform::TikTok => "Daily 19:00-22:00 local, evening scroll peak",
            Platform::YouTubeShorts => "Fri-Sun 12:00-15:00 local, weekend discovery window",
            Platform::Pinterest => "Sat-Sun 20:00-23:00 local, planning and saving sessions",
            Platform::Instagram => "Mon-Fri 11:00-13:00 local, lunch-break browsing",
            Platform::Facebook => "Wed-Fri 13:00-16:00 local, group activity peak",
            Platform::GoogleSearch => {
                "Publish Monday morning and refresh weekly while search demand builds"
            }
        }
    }

    /// Who the copy speaks to on this platform.
    #[must_use]
    pub fn audience(self) -> &'static str {
        match self {
            Platform::LinkedIn => "founders and operators",
            Platform::TikTok => "curious creators",
            Platform::YouTubeShorts => "self-taught builders",
            Platform::Pinterest => "planners collecting ideas",
            Platform::Instagram => "small-business owners",
            Platform::Facebook => "local business communities",
            Platform::GoogleSearch => "people searching for a fix",
        }
    }

    #[must_use]
    pub fn creative_format(self) -> &'static str {
        match self {
            Platform::LinkedIn => "8-slide document carousel",
            Platform::TikTok => "20-second vertical talking-head video with on-screen captions",
            Platform::YouTubeShorts => "45-second vertical screen recording with voice-over",
            Platform::Pinterest => "1000x1500 infographic pin",
            Platform::Instagram => "5-frame Reel plus matching carousel",
            Platform::Facebook => "native post with a single square graphic and a poll",
            Platform::GoogleSearch => "1,200-word how-to article with FAQ schema",
        }
    }

    /// Platform-generic tags appended after topic keywords.
    #[must_use]
    pub fn generic_hashtags(self) -> &'static [&'static str] {
        match self {
            Platform::LinkedIn => &["#ai", "#automation", "#futureofwork"],
            Platform::TikTok => &["#ai", "#aitools", "#learnontiktok"],
            Platform::YouTubeShorts => &["#ai", "#shorts", "#automation"],
            Platform::Pinterest => &["#ai", "#productivity", "#businesstips"],
            Platform::Instagram => &[
                "#ai",
                "#aitools",
                "#automation",
                "#smallbusiness",
                "#productivity",
            ],
            Platform::Facebook => &["#ai", "#smallbusiness"],
            Platform::GoogleSearch => &["#ai", "#automation"],
        }
    }

    #[must_use]
    pub fn booster_actions(self) -> &'static [&'static str] {
        match self {
            Platform::LinkedIn => &[
                "Reply to every comment within the first hour",
                "Tag two operators who would disagree and ask for their take",
            ],
            Platform::TikTok => &[
                "Pin a comment with the free playbook keyword",
                "Stitch the top reply within 24 hours",
            ],
            Platform::YouTubeShorts => &[
                "Link the Short to the matching long-form walkthrough",
                "Ask a yes/no question in the first line of the description",
            ],
            Platform::Pinterest => &[
                "Save the pin to three keyword-named boards",
                "Create two alternate pin designs for the same URL",
            ],
            Platform::Instagram => &[
                "Share the Reel to Stories with a question sticker",
                "Send the carousel to the broadcast channel",
            ],
            Platform::Facebook => &[
                "Cross-post into two relevant groups with a tailored intro",
                "Go live for 10 minutes answering the top poll result",
            ],
            Platform::GoogleSearch => &[
                "Internally link from the three highest-traffic pages",
                "Submit the URL for indexing in Search Console",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = Platform::ALL.iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), Platform::ALL.len());
    }

    #[test]
    fn every_platform_allows_at_least_one_hashtag() {
        for platform in Platform::ALL {
            assert!(platform.hashtag_limit() >= 1, "{platform:?}");
            assert!(!platform.generic_hashtags().is_empty(), "{platform:?}");
        }
    }

    #[test]
    fn generic_hashtags_are_normalized() {
        for platform in Platform::ALL {
            for tag in platform.generic_hashtags() {
                assert!(tag.starts_with('#'), "{tag}");
                assert_eq!(*tag, tag.to_lowercase(), "{tag}");
            }
        }
    }

    #[test]
    fn short_copy_limits_leave_room_for_ellipsis() {
        for platform in Platform::ALL {
            assert!(platform.short_copy_limit() > 3, "{platform:?}");
        }
    }
}
