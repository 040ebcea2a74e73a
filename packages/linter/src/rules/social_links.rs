use crate::diagnostic::Finding;
use crate::rules::{is_placeholder_url, LintRule};
use mailblocks_model::Block;

/// Every social platform needs a profile URL
pub struct SocialLinksRule;

impl LintRule for SocialLinksRule {
    fn name(&self) -> &'static str {
        "social-links"
    }

    fn description(&self) -> &'static str {
        "Require a URL for each social platform"
    }

    fn check_block(&self, block: &Block) -> Vec<Finding> {
        let Block::SocialLinks(social) = block else {
            return Vec::new();
        };

        social
            .platforms
            .iter()
            .filter(|link| is_placeholder_url(&link.url))
            .map(|link| {
                Finding::warning(
                    self.name(),
                    block,
                    format!("Social link for {} is missing or invalid", link.platform.as_str()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblocks_model::{SocialLink, SocialLinksBlock, SocialPlatform};

    #[test]
    fn test_one_warning_per_bad_platform() {
        let block = Block::SocialLinks(SocialLinksBlock {
            id: "s".to_string(),
            platforms: vec![
                SocialLink {
                    platform: SocialPlatform::Facebook,
                    url: "#".to_string(),
                },
                SocialLink {
                    platform: SocialPlatform::Github,
                    url: "https://github.com/x".to_string(),
                },
                SocialLink {
                    platform: SocialPlatform::Youtube,
                    url: String::new(),
                },
            ],
            ..Default::default()
        });

        let findings = SocialLinksRule.check_block(&block);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].message, "Social link for facebook is missing or invalid");
        assert_eq!(findings[1].message, "Social link for youtube is missing or invalid");
    }
}
