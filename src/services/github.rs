//! GitHub repositories for the projects section

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::common::GithubError;
use crate::config::profile;
use crate::models::Project;

const API_BASE: &str = "https://api.github.com/";
const SHOWCASE_LIMIT: usize = 12;
const POPULAR_LANGUAGES: &[&str] = &["javascript", "typescript", "python", "react"];

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    user: String,
}

#[derive(Debug, Deserialize)]
struct ReadmeResponse {
    content: String,
}

impl GithubClient {
    pub fn new(user: &str) -> Self {
        Self {
            http: Client::new(),
            user: user.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, GithubError> {
        Url::parse(&format!("{API_BASE}{path}"))
            .map_err(|e| GithubError::Decode(e.to_string()))
    }

    /// Most recently updated repositories, narrowed to the showcase selection.
    pub async fn showcase_projects(&self) -> Result<Vec<Project>, GithubError> {
        let mut url = self.endpoint(&format!("users/{}/repos", self.user))?;
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", "50");

        let response = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(GithubError::Status(response.status().as_u16()));
        }

        let repos = response.json::<Vec<Project>>().await?;
        tracing::debug!(count = repos.len(), user = %self.user, "fetched repositories");
        Ok(select_showcase(repos, profile::SHOWCASE_TOPIC))
    }

    /// README text of a repository, decoded from the API's base64 payload.
    pub async fn readme(&self, project: &Project) -> Result<String, GithubError> {
        let url = self.endpoint(&format!(
            "repos/{}/{}/readme",
            project.owner.login, project.name
        ))?;
        let response = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(GithubError::Status(response.status().as_u16()));
        }

        let body = response.json::<ReadmeResponse>().await?;
        decode_readme(&body.content)
    }

    /// README text, or a generated one when GitHub cannot provide it.
    pub async fn readme_or_fallback(&self, project: &Project) -> String {
        match self.readme(project).await {
            Ok(readme) => readme,
            Err(e) => {
                tracing::warn!(repo = %project.name, error = %e, "using generated README");
                fallback_readme(project)
            }
        }
    }
}

/// Keeps repositories worth showing: tagged with the owner's topic, starred,
/// forked, described as portfolio work, or written in a popular language.
/// At most twelve, in the given order.
pub fn select_showcase(repos: Vec<Project>, topic: &str) -> Vec<Project> {
    repos
        .into_iter()
        .filter(|repo| {
            repo.topics.iter().any(|t| t == topic)
                || repo.stargazers_count > 0
                || repo.forks_count > 0
                || repo
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains("portfolio"))
                || repo
                    .language
                    .as_deref()
                    .is_some_and(|l| POPULAR_LANGUAGES.contains(&l.to_lowercase().as_str()))
        })
        .take(SHOWCASE_LIMIT)
        .collect()
}

/// Decodes GitHub's line-wrapped base64 into UTF-8 text.
pub fn decode_readme(content: &str) -> Result<String, GithubError> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| GithubError::Decode(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn fallback_readme(project: &Project) -> String {
    let language = project.language.as_deref();
    let node = matches!(language, Some("JavaScript") | Some("TypeScript"));

    let technologies = if project.topics.is_empty() {
        "- Modern development stack".to_string()
    } else {
        project
            .topics
            .iter()
            .map(|t| format!("- {t}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let (runtime, install, run) = if node {
        ("Node.js and npm", "npm install", "npm start")
    } else {
        (
            language.unwrap_or("Required runtime"),
            "# Install dependencies as per project requirements",
            "# Run the project as per instructions",
        )
    };

    format!(
        "# {name}\n\n\
         {description}\n\n\
         ## Overview\n\n\
         This is a {lang} project that demonstrates various programming concepts \
         and best practices.\n\n\
         ## Technologies Used\n\n\
         {technologies}\n\n\
         ## Getting Started\n\n\
         ### Prerequisites\n\n\
         - Git\n\
         - {runtime}\n\n\
         ### Installation\n\n\
         ```bash\ngit clone {url}\ncd {name}\n{install}\n```\n\n\
         ### Running\n\n\
         ```bash\n{run}\n```\n\n\
         ## Contact\n\n\
         - GitHub: [@{owner}](https://github.com/{owner})\n\
         - Email: {email}\n",
        name = project.name,
        description = project.description.as_deref().unwrap_or("No description available"),
        lang = project.language_or_default(),
        url = project.html_url,
        owner = project.owner.login,
        email = profile::EMAIL,
    )
}
