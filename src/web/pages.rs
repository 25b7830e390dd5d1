use std::fmt::Display;

/// Entries of the sidebar menu, in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    RecommenderSystem,
    SolutionOverview,
    ExploratoryDataAnalysis,
    AboutUs,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::RecommenderSystem,
        Page::SolutionOverview,
        Page::ExploratoryDataAnalysis,
        Page::AboutUs,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::RecommenderSystem => "Recommender System",
            Page::SolutionOverview => "Solution Overview",
            Page::ExploratoryDataAnalysis => "Exploratory Data Analysis",
            Page::AboutUs => "About Us",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::RecommenderSystem => "recommender",
            Page::SolutionOverview => "overview",
            Page::ExploratoryDataAnalysis => "eda",
            Page::AboutUs => "about",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// URL the menu links to
    pub fn path(&self) -> String {
        format!("/pages/{}", self.slug())
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
