//! Partner and tooling logos shown in the logo cloud

/// A logo image in the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Tools we build automations with
pub const PARTNER_LOGOS: &[Logo] = &[
    Logo {
        src: "https://cdn.worldvectorlogo.com/logos/n8n-io.svg",
        alt: "n8n",
    },
    Logo {
        src: "https://asset.brandfetch.io/idZAhuPTHv/idMJlizHHD.svg",
        alt: "Make.com",
    },
    Logo {
        src: "https://cdn.worldvectorlogo.com/logos/zapier.svg",
        alt: "Zapier",
    },
    Logo {
        src: "https://svgl.app/library/openai_wordmark_light.svg",
        alt: "OpenAI",
    },
    Logo {
        src: "https://svgl.app/library/claude-ai-wordmark-icon_light.svg",
        alt: "Claude AI",
    },
    Logo {
        src: "https://svgl.app/library/supabase_wordmark_light.svg",
        alt: "Supabase",
    },
    Logo {
        src: "https://cdn.worldvectorlogo.com/logos/airtable-1.svg",
        alt: "Airtable",
    },
    Logo {
        src: "https://asset.brandfetch.io/idZnB_OB16/idKA33sUyR.svg",
        alt: "Bolt.new",
    },
    Logo {
        src: "https://avatars.githubusercontent.com/u/164673910?s=200&v=4",
        alt: "Lovable",
    },
    Logo {
        src: "https://asset.brandfetch.io/idViYwB4es/idlcE3ql-m.svg",
        alt: "Replit",
    },
    Logo {
        src: "https://www.gstatic.com/lamda/images/gemini_wordmark_f7c3bbad51f823db49202c.svg",
        alt: "Gemini",
    },
    Logo {
        src: "https://asset.brandfetch.io/idpPgCl8n_/id43VqHRdX.svg",
        alt: "Vapi",
    },
    Logo {
        src: "https://cdn.worldvectorlogo.com/logos/notion-logo-1.svg",
        alt: "Notion",
    },
    Logo {
        src: "https://svgl.app/library/github_wordmark_light.svg",
        alt: "GitHub",
    },
];

/// Logos in marquee order: the list twice, so the track can loop seamlessly.
///
/// Each entry carries a key unique within the track.
pub fn marquee_track(logos: &[Logo]) -> Vec<(String, Logo)> {
    logos
        .iter()
        .chain(logos.iter())
        .enumerate()
        .map(|(index, logo)| (format!("logo-{}-{}", logo.alt, index), *logo))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_partner_logos() {
        assert_eq!(PARTNER_LOGOS.len(), 14);
        assert!(PARTNER_LOGOS.iter().all(|l| l.src.starts_with("https://")));
    }

    #[test]
    fn test_marquee_track_repeats_with_unique_keys() {
        let track = marquee_track(PARTNER_LOGOS);

        assert_eq!(track.len(), PARTNER_LOGOS.len() * 2);
        assert_eq!(track[0].1, track[PARTNER_LOGOS.len()].1);

        let keys: HashSet<_> = track.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys.len(), track.len());
    }
}
