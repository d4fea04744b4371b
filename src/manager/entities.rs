use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::form::{FieldKind, FieldSpec, FormValues, join_list};
use super::{Entity, Publishable, Summary};
use crate::models::{Achievement, BlogPost, Certification, Skill, slugify};
use crate::store::Row;
use crate::store::content::{ACHIEVEMENTS, BLOG_POSTS, CERTIFICATIONS, SKILLS};

const BLOG_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("published", "Published"),
    ("draft", "Drafts"),
];

const BLOG_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text)
        .required()
        .placeholder("Enter post title"),
    FieldSpec::new("slug", "Slug", FieldKind::Text)
        .required()
        .placeholder("post-url-slug"),
    FieldSpec::new("excerpt", "Excerpt", FieldKind::LongText { rows: 3 })
        .required()
        .placeholder("Brief description of the post"),
    FieldSpec::new("content", "Content (Markdown)", FieldKind::LongText { rows: 16 })
        .required()
        .placeholder("Write your post content here..."),
    FieldSpec::new("tags", "Tags", FieldKind::List)
        .placeholder("React, TypeScript, Web Development"),
    FieldSpec::new("read_time", "Read Time (minutes)", FieldKind::Number { min: 1, max: 60 })
        .default_value("5"),
    FieldSpec::new("is_published", "Published", FieldKind::Checkbox).default_value("false"),
];

impl Entity for BlogPost {
    const TABLE: &'static str = BLOG_POSTS;
    const SORT_KEY: &'static str = "created_at";
    const NOUN: &'static str = "Post";
    const TITLE: &'static str = "Blog Posts";
    const EMPTY_MESSAGE: &'static str = "No blog posts found";
    const FAILURE_MESSAGE: &'static str = "Failed to load blog posts";

    fn id(&self) -> Uuid {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        BLOG_FIELDS
    }

    fn filters() -> &'static [(&'static str, &'static str)] {
        BLOG_FILTERS
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.status() == filter
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("title", &self.title)
            .with("slug", &self.slug)
            .with("excerpt", &self.excerpt)
            .with("content", &self.content)
            .with("tags", join_list(&self.tags))
            .with("read_time", self.read_time)
            .with("is_published", self.is_published)
    }

    fn summary(&self) -> Summary {
        Summary {
            title: self.title.clone(),
            subtitle: self.excerpt.clone(),
            badges: vec![self.status().label().to_string()],
            detail: format!(
                "{} · {} min read · {}",
                self.display_date(),
                self.read_time,
                join_list(&self.tags)
            ),
        }
    }

    /// While creating, the slug follows the title.
    fn on_field_change(values: &mut FormValues, field: &str, creating: bool) {
        if creating && field == "title" {
            let slug = slugify(values.get("title"));
            values.set("slug", slug);
        }
    }

    fn finalize(row: &mut Row, now: DateTime<Utc>) {
        let published = row
            .get("is_published")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let published_at = if published {
            Value::String(now.to_rfc3339())
        } else {
            Value::Null
        };
        row.insert("published_at".to_string(), published_at);
    }
}

impl Publishable for BlogPost {
    fn is_published(&self) -> bool {
        self.is_published
    }
}

const CERTIFICATION_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("technical", "Technical"),
    ("professional", "Professional"),
    ("academic", "Academic"),
];

const CERTIFICATION_CATEGORIES: &[(&str, &str)] = &[
    ("technical", "Technical"),
    ("professional", "Professional"),
    ("academic", "Academic"),
];

const CERTIFICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Certification Title", FieldKind::Text)
        .required()
        .placeholder("AWS Certified Solutions Architect"),
    FieldSpec::new("issuer", "Issuer", FieldKind::Text)
        .required()
        .placeholder("Amazon Web Services"),
    FieldSpec::new("issue_date", "Issue Date", FieldKind::Date).required(),
    FieldSpec::new("expiry_date", "Expiry Date", FieldKind::Date),
    FieldSpec::new("credential_id", "Credential ID", FieldKind::Text)
        .required()
        .placeholder("AWS-ASA-2023-001"),
    FieldSpec::new("category", "Category", FieldKind::Select(CERTIFICATION_CATEGORIES))
        .required()
        .default_value("technical"),
    FieldSpec::new("verification_url", "Verification URL", FieldKind::Url)
        .required()
        .placeholder("https://aws.amazon.com/verification"),
    FieldSpec::new("image_url", "Image URL", FieldKind::Url)
        .required()
        .placeholder("https://images.pexels.com/..."),
    FieldSpec::new("description", "Description", FieldKind::LongText { rows: 4 })
        .required()
        .placeholder("Describe what this certification validates..."),
    FieldSpec::new("skills", "Skills", FieldKind::List)
        .placeholder("AWS, Cloud Architecture, System Design, Security"),
];

impl Entity for Certification {
    const TABLE: &'static str = CERTIFICATIONS;
    const SORT_KEY: &'static str = "issue_date";
    const NOUN: &'static str = "Certification";
    const TITLE: &'static str = "Certifications";
    const EMPTY_MESSAGE: &'static str = "No certifications found";
    const FAILURE_MESSAGE: &'static str = "Failed to load certifications";

    fn id(&self) -> Uuid {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        CERTIFICATION_FIELDS
    }

    fn filters() -> &'static [(&'static str, &'static str)] {
        CERTIFICATION_FILTERS
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.category == filter
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("title", &self.title)
            .with("issuer", &self.issuer)
            .with("issue_date", self.issue_date)
            .with(
                "expiry_date",
                self.expiry_date.map(|d| d.to_string()).unwrap_or_default(),
            )
            .with("credential_id", &self.credential_id)
            .with("category", self.category)
            .with("verification_url", &self.verification_url)
            .with("image_url", &self.image_url)
            .with("description", &self.description)
            .with("skills", join_list(&self.skills))
    }

    fn summary(&self) -> Summary {
        Summary {
            title: self.title.clone(),
            subtitle: self.issuer.clone(),
            badges: vec![self.category.label().to_string()],
            detail: format!(
                "Issued {} · {}",
                self.issue_date.format("%b %Y"),
                join_list(&self.skills)
            ),
        }
    }
}

const ACHIEVEMENT_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("award", "Awards"),
    ("recognition", "Recognition"),
    ("milestone", "Milestones"),
];

const ACHIEVEMENT_CATEGORIES: &[(&str, &str)] = &[
    ("award", "Award"),
    ("recognition", "Recognition"),
    ("milestone", "Milestone"),
];

const ACHIEVEMENT_ICONS: &[(&str, &str)] = &[
    ("🏆", "Trophy"),
    ("🥇", "Gold Medal"),
    ("🥈", "Silver Medal"),
    ("🥉", "Bronze Medal"),
    ("⭐", "Star"),
    ("🏅", "Sports Medal"),
    ("🎯", "Target"),
    ("🚀", "Rocket"),
    ("💎", "Diamond"),
    ("👑", "Crown"),
    ("🔥", "Fire"),
    ("🌟", "Glowing Star"),
    ("🎓", "Graduation Cap"),
    ("📚", "Books"),
    ("🔬", "Microscope"),
    ("💻", "Laptop"),
    ("🧠", "Brain"),
    ("💡", "Light Bulb"),
    ("📈", "Chart Increasing"),
    ("🎉", "Party Popper"),
];

const ACHIEVEMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text)
        .required()
        .placeholder("Best Paper Award"),
    FieldSpec::new("description", "Description", FieldKind::Text)
        .required()
        .placeholder("International Conference on Software Engineering 2024"),
    FieldSpec::new("date", "Date", FieldKind::Date).required(),
    FieldSpec::new("category", "Category", FieldKind::Select(ACHIEVEMENT_CATEGORIES))
        .required()
        .default_value("award"),
    FieldSpec::new("icon", "Icon", FieldKind::Select(ACHIEVEMENT_ICONS))
        .required()
        .default_value("🏆"),
    FieldSpec::new("details", "Details", FieldKind::LongText { rows: 5 })
        .required()
        .placeholder("Provide detailed information about this achievement..."),
];

impl Entity for Achievement {
    const TABLE: &'static str = ACHIEVEMENTS;
    const SORT_KEY: &'static str = "date";
    const NOUN: &'static str = "Achievement";
    const TITLE: &'static str = "Achievements";
    const EMPTY_MESSAGE: &'static str = "No achievements found";
    const FAILURE_MESSAGE: &'static str = "Failed to load achievements";

    fn id(&self) -> Uuid {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        ACHIEVEMENT_FIELDS
    }

    fn filters() -> &'static [(&'static str, &'static str)] {
        ACHIEVEMENT_FILTERS
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.category == filter
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("title", &self.title)
            .with("description", &self.description)
            .with("date", self.date)
            .with("category", self.category)
            .with("icon", &self.icon)
            .with("details", &self.details)
    }

    fn summary(&self) -> Summary {
        Summary {
            title: format!("{} {}", self.icon, self.title).trim().to_string(),
            subtitle: self.description.clone(),
            badges: vec![self.category.label().to_string()],
            detail: self.date.format("%B %-d, %Y").to_string(),
        }
    }
}

const SKILL_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("frontend", "Frontend"),
    ("backend", "Backend"),
    ("research", "Research"),
    ("tools", "Tools"),
    ("database", "Database"),
    ("cloud", "Cloud"),
    ("mobile", "Mobile"),
];

const SKILL_CATEGORIES: &[(&str, &str)] = &[
    ("frontend", "Frontend"),
    ("backend", "Backend"),
    ("research", "Research"),
    ("tools", "Tools"),
    ("database", "Database"),
    ("cloud", "Cloud"),
    ("mobile", "Mobile"),
];

const SKILL_ICONS: &[(&str, &str)] = &[
    ("Code", "Code"),
    ("Zap", "Zap"),
    ("BookOpen", "Book Open"),
    ("Lightbulb", "Lightbulb"),
    ("Database", "Database"),
    ("Cloud", "Cloud"),
    ("Smartphone", "Smartphone"),
    ("Award", "Award"),
    ("Users", "Users"),
];

const PROFICIENCY_LEVELS: &[(&str, &str)] = &[
    ("1", "Novice"),
    ("2", "Beginner"),
    ("3", "Intermediate"),
    ("4", "Advanced"),
    ("5", "Expert"),
];

const SKILL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Skill Name", FieldKind::Text)
        .required()
        .placeholder("Frontend Development"),
    FieldSpec::new("category", "Category", FieldKind::Select(SKILL_CATEGORIES))
        .required()
        .default_value("frontend"),
    FieldSpec::new("icon", "Icon", FieldKind::Select(SKILL_ICONS))
        .required()
        .default_value("Code"),
    FieldSpec::new("proficiency_level", "Proficiency Level", FieldKind::Select(PROFICIENCY_LEVELS))
        .required()
        .default_value("3"),
    FieldSpec::new("years_experience", "Years of Experience", FieldKind::Number { min: 0, max: 50 })
        .required()
        .default_value("1"),
    FieldSpec::new("is_featured", "Featured skill", FieldKind::Checkbox).default_value("false"),
    FieldSpec::new("technologies", "Technologies", FieldKind::List)
        .required()
        .placeholder("React, Next.js, TypeScript, Tailwind CSS"),
    FieldSpec::new("description", "Description", FieldKind::LongText { rows: 4 })
        .required()
        .placeholder("Describe your expertise in this skill area..."),
];

impl Entity for Skill {
    const TABLE: &'static str = SKILLS;
    const SORT_KEY: &'static str = "proficiency_level";
    const NOUN: &'static str = "Skill";
    const TITLE: &'static str = "Skills";
    const EMPTY_MESSAGE: &'static str = "No skills found";
    const FAILURE_MESSAGE: &'static str = "Failed to load skills";
    const SHOW_FILTER_COUNTS: bool = true;

    fn id(&self) -> Uuid {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        SKILL_FIELDS
    }

    fn filters() -> &'static [(&'static str, &'static str)] {
        SKILL_FILTERS
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.category == filter
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("name", &self.name)
            .with("category", self.category)
            .with("icon", &self.icon)
            .with("proficiency_level", self.proficiency_level)
            .with("years_experience", self.years_experience)
            .with("is_featured", self.is_featured)
            .with("technologies", join_list(&self.technologies))
            .with("description", &self.description)
    }

    fn summary(&self) -> Summary {
        let mut badges = vec![
            self.category.label().to_string(),
            self.proficiency_label().to_string(),
        ];
        if self.is_featured {
            badges.push("Featured".to_string());
        }
        Summary {
            title: self.name.clone(),
            subtitle: self.description.clone(),
            badges,
            detail: format!(
                "{} yrs · {}",
                self.years_experience,
                join_list(&self.technologies)
            ),
        }
    }

    /// The proficiency select yields text; the column is numeric.
    fn finalize(row: &mut Row, _now: DateTime<Utc>) {
        let level = row
            .get("proficiency_level")
            .and_then(Value::as_str)
            .and_then(|raw| raw.parse::<u8>().ok())
            .unwrap_or(3);
        row.insert("proficiency_level".to_string(), Value::from(level));
    }
}
