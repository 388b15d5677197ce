// The fixed list of news sites to scrape.
//
// Each source names the HTML tags whose text is treated as a headline on
// that site. The markup of these sites changes without notice — when it
// does, a source silently contributes fewer (or zero) headlines. That is
// accepted: there is no contract with the scraped pages.

/// One news site: display label, front-page URL, and the HTML tag names
/// to scan for headline text.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: &'static str,
    pub url: &'static str,
    pub tags: &'static [&'static str],
}

/// The built-in source list. Order here is the order headlines are
/// aggregated and therefore the order matches are reported in.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source {
            name: "BBC",
            url: "https://www.bbc.co.uk",
            tags: &["h3", "h2"],
        },
        Source {
            name: "The Guardian",
            url: "https://www.theguardian.com/observer",
            tags: &["h3"],
        },
        Source {
            name: "CNN",
            url: "https://www.cnn.com",
            tags: &["h3", "span"],
        },
        Source {
            name: "Al Jazeera",
            url: "https://www.aljazeera.com",
            tags: &["h3", "h2", "h1"],
        },
        Source {
            name: "Associated Press",
            url: "https://www.apnews.com",
            tags: &["h3", "h2", "a"],
        },
        Source {
            name: "ABC News",
            url: "https://abcnews.go.com",
            tags: &["h3", "h2"],
        },
        Source {
            name: "New York Times",
            url: "https://www.nytimes.com",
            tags: &["h3", "h2"],
        },
    ]
}
