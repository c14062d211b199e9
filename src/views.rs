use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

use crate::mappers::profile_mapper::ProfileViewModel;


#[derive(Debug, Serialize)]
pub struct InputViewModel {
    pub has_attempt: bool,
}

/// Registry for the web pages. Values are HTML-escaped.
pub fn html_registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string("template", include_str!("templates/template.hbs"))?;
    handlebars.register_template_string("index", include_str!("templates/index.hbs"))?;
    handlebars.register_template_string("profile", include_str!("templates/profile.hbs"))?;
    handlebars.register_template_string("errors/500", include_str!("templates/errors/500.hbs"))?;
    Ok(handlebars)
}

/// Registry for terminal output. Nothing is escaped.
pub fn text_registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_template_string("input", include_str!("templates/text/input.hbs"))?;
    handlebars.register_template_string("profile", include_str!("templates/text/profile.hbs"))?;
    Ok(handlebars)
}

pub fn render_profile(registry: &Handlebars<'_>, vm: &ProfileViewModel) -> Result<String, RenderError> {
    registry.render("profile", vm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchError;
    use crate::mappers::profile_mapper::{self, NO_REPOSITORIES};
    use crate::models::fetch_outcome::FetchOutcome;
    use crate::models::github_repository::Repository;
    use crate::models::github_user::UserProfile;
    use crate::models::username::Username;

    fn username() -> Username {
        Username::sanitize("octocat").unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: Some("The <Octocat>".into()),
            avatar_url: "https://avatars.githubusercontent.com/u/583231?v=4".into(),
            bio: None,
            location: Some("San Francisco".into()),
            followers: 21000,
            following: 9,
        }
    }

    #[test]
    fn templates_register() {
        assert!(html_registry().is_ok());
        assert!(text_registry().is_ok());
    }

    #[test]
    fn text_renders_every_state() {
        let registry = text_registry().unwrap();

        let loading = profile_mapper::to_view_model(&username(), &FetchOutcome::Loading);
        assert!(render_profile(&registry, &loading).unwrap().contains("Loading octocat..."));

        let failed = profile_mapper::to_view_model(
            &username(),
            &FetchOutcome::Failed(FetchError::InvalidResponse),
        );
        let text = render_profile(&registry, &failed).unwrap();
        assert!(text.contains(FetchError::InvalidResponse.user_message()));
        assert!(!text.contains("Repositories"));
    }

    #[test]
    fn empty_repositories_render_placeholder() {
        let registry = text_registry().unwrap();
        let outcome = FetchOutcome::Succeeded { profile: profile(), repositories: vec![] };
        let vm = profile_mapper::to_view_model(&username(), &outcome);

        let text = render_profile(&registry, &vm).unwrap();
        assert!(text.contains("The <Octocat>"));
        assert!(text.contains("21000 followers"));
        assert!(text.contains(NO_REPOSITORIES));
    }

    #[test]
    fn repositories_render_in_order_with_links() {
        let registry = html_registry().unwrap();
        let repositories = vec![
            Repository {
                id: 2,
                name: "second-by-id".into(),
                description: None,
                visibility: Some("public".into()),
                language: Some("Rust".into()),
                clone_url: "https://github.com/octocat/second-by-id.git".into(),
            },
            Repository {
                id: 1,
                name: "first-by-id".into(),
                description: Some("desc".into()),
                visibility: None,
                language: None,
                clone_url: "https://github.com/octocat/first-by-id.git".into(),
            },
        ];
        let outcome = FetchOutcome::Succeeded { profile: profile(), repositories };
        let vm = profile_mapper::to_view_model(&username(), &outcome);

        let html = render_profile(&registry, &vm).unwrap();
        let second = html.find("second-by-id").unwrap();
        let first = html.find("first-by-id").unwrap();
        assert!(second < first);
        assert!(html.contains(r#"href="https://github.com/octocat/first-by-id.git""#));
        assert!(html.contains("The &lt;Octocat&gt;"));
        assert!(!html.contains(NO_REPOSITORIES));
    }
}
