use super::{escape_html, format_number, ErrorBanner};
use crate::messages::{MessageId, Messages};
use crate::models::{RepositorySummary, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Clears earlier output, used for a new search
    Replace,
    /// Keeps earlier output, used for load-more
    Append,
}

/// One child of the result container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultNode {
    Card(String),
    Notice(String),
}

impl ResultNode {
    fn html(&self) -> &str {
        match self {
            ResultNode::Card(html) | ResultNode::Notice(html) => html,
        }
    }
}

/// Search panel state: input, sort selector, results, load-more control and banner
#[derive(Debug, Clone, Default)]
pub struct SearchDocument {
    pub input: String,
    pub sort: SortOrder,
    pub results: Vec<ResultNode>,
    pub load_more: bool,
    pub banner: ErrorBanner,
}

impl SearchDocument {
    pub fn card_count(&self) -> usize {
        self.results
            .iter()
            .filter(|node| matches!(node, ResultNode::Card(_)))
            .count()
    }

    pub fn show_loading(&mut self, messages: &Messages) {
        self.results = vec![notice(messages.get(MessageId::Loading))];
    }

    /// Renders a fetch outcome into the result container.
    ///
    /// `None` means the error was already surfaced: nothing is added and the
    /// load-more control goes away. An empty page shows the empty-state notice.
    pub fn render_results(
        &mut self,
        mode: RenderMode,
        payload: Option<&[RepositorySummary]>,
        show_more: bool,
        messages: &Messages,
    ) {
        if mode == RenderMode::Replace {
            self.results.clear();
        }
        self.load_more = false;

        let Some(repos) = payload else {
            return;
        };

        if repos.is_empty() {
            let empty = match mode {
                RenderMode::Replace => MessageId::NoRepositories,
                RenderMode::Append => MessageId::NoMoreRepositories,
            };
            self.results.push(notice(messages.get(empty)));
            return;
        }

        self.results.extend(
            repos
                .iter()
                .map(|repo| ResultNode::Card(render_repo_card(&RepoCardView::new(repo, messages)))),
        );
        self.load_more = show_more;
    }

    pub fn render_results_html(&self) -> String {
        self.results.iter().map(ResultNode::html).collect()
    }

    pub fn render_load_more(&self, messages: &Messages) -> String {
        if !self.load_more {
            return String::new();
        }
        format!(
            r#"<div class="load-more"><form method="post" action="/search/more"><button type="submit">{}</button></form></div>"#,
            escape_html(messages.get(MessageId::LoadMore))
        )
    }
}

fn notice(text: &str) -> ResultNode {
    ResultNode::Notice(format!(r#"<p class="loading">{}</p>"#, escape_html(text)))
}

/// Display fields for one repository card, still unescaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCardView {
    pub href: String,
    pub title: String,
    pub description: String,
    pub stars: String,
    pub forks: String,
    pub owner: String,
    pub language: Option<String>,
}

impl RepoCardView {
    pub fn new(repo: &RepositorySummary, messages: &Messages) -> Self {
        Self {
            href: safe_href(&repo.url),
            title: format!("{}/{}", repo.owner, repo.name),
            description: repo
                .description
                .clone()
                .unwrap_or_else(|| messages.get(MessageId::NoDescription).to_string()),
            stars: format_number(repo.star_count),
            forks: format_number(repo.fork_count),
            owner: repo.owner.clone(),
            language: repo.primary_language.clone(),
        }
    }
}

// Escaping alone does not neutralise `javascript:` links
fn safe_href(url: &str) -> String {
    if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        "#".to_string()
    }
}

pub fn render_repo_card(view: &RepoCardView) -> String {
    let language = view
        .language
        .as_deref()
        .map(|lang| format!(r#"<span class="language-badge">{}</span>"#, escape_html(lang)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="repo-card">"#,
            r#"<a href="{href}" class="repo-name" target="_blank" rel="noopener noreferrer">{title}</a>"#,
            r#"<p class="repo-description">{description}</p>"#,
            r#"<div class="repo-meta"><span>⭐ {stars}</span><span>🔱 {forks}</span><span>👤 {owner}</span>{language}</div>"#,
            r#"</div>"#
        ),
        href = escape_html(&view.href),
        title = escape_html(&view.title),
        description = escape_html(&view.description),
        stars = escape_html(&view.stars),
        forks = escape_html(&view.forks),
        owner = escape_html(&view.owner),
        language = language,
    )
}
