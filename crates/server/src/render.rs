//! Handlebars registry and page templates.
//!
//! Templates are compiled once at startup and shared through
//! `ServerState`. Sections render from plain model slices; an empty
//! slice simply produces an empty section.

use handlebars::Handlebars;
use serde_json::json;

use models::{case_study, service_item, team_member, testimonial, working_process};

const HOME_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Studio</title>
</head>
<body>
  <header><h1>Studio</h1></header>
  <section id="services">
    <h2>Services</h2>
    {{#each services as |s|}}
    <article class="service">
      {{#if s.icon}}<span class="icon">{{s.icon}}</span>{{/if}}
      <h3>{{s.title}}</h3>
      {{#if s.description}}<p>{{s.description}}</p>{{/if}}
    </article>
    {{/each}}
  </section>
  <section id="process">
    <h2>How We Work</h2>
    <ol>
      {{#each working_processes as |p|}}
      <li value="{{p.step_no}}">
        <h3>{{p.title}}</h3>
        {{#if p.description}}<p>{{p.description}}</p>{{/if}}
      </li>
      {{/each}}
    </ol>
  </section>
  <section id="team">
    <h2>Team</h2>
    {{#each team_members as |m|}}
    <article class="member">
      {{#if m.photo_url}}<img src="{{m.photo_url}}" alt="{{m.name}}">{{/if}}
      <h3>{{m.name}}</h3>
      {{#if m.role_title}}<p class="role">{{m.role_title}}</p>{{/if}}
      {{#if m.bio}}<p>{{m.bio}}</p>{{/if}}
    </article>
    {{/each}}
  </section>
  <section id="testimonials">
    <h2>What Clients Say</h2>
    {{#each testimonials as |t|}}
    <blockquote>
      <p>{{t.quote}}</p>
      <cite>{{t.author_name}}{{#if t.company}}, {{t.company}}{{/if}}</cite>
    </blockquote>
    {{/each}}
  </section>
  <section id="case-studies">
    <h2>Case Studies</h2>
    {{#each case_studies as |c|}}
    <article class="case-study">
      <h3><a href="/case-studies">{{c.title}}</a></h3>
      {{#if c.client_name}}<p class="client">{{c.client_name}}</p>{{/if}}
      {{#if c.summary}}<p>{{c.summary}}</p>{{/if}}
    </article>
    {{/each}}
  </section>
</body>
</html>
"##;

const CASE_STUDIES_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Case Studies</title>
</head>
<body>
  <header><h1>Case Studies</h1><a href="/">Home</a></header>
  <main>
    {{#each case_studies as |c|}}
    <article class="case-study">
      <h2>{{c.title}}</h2>
      {{#if c.client_name}}<p class="client">{{c.client_name}}</p>{{/if}}
      {{#if c.summary}}<p>{{c.summary}}</p>{{/if}}
    </article>
    {{/each}}
  </main>
</body>
</html>
"##;

pub fn get_handlebars() -> anyhow::Result<Handlebars<'static>> {
    let mut hb = Handlebars::new();
    hb.register_template_string("home", HOME_TEMPLATE)?;
    hb.register_template_string("case_studies", CASE_STUDIES_TEMPLATE)?;
    Ok(hb)
}

pub fn render_home(
    hb: &Handlebars<'static>,
    services: &[service_item::Model],
    working_processes: &[working_process::Model],
    team_members: &[team_member::Model],
    testimonials: &[testimonial::Model],
    case_studies: &[case_study::Model],
) -> Result<String, handlebars::RenderError> {
    let ctx = json!({
        "services": services,
        "working_processes": working_processes,
        "team_members": team_members,
        "testimonials": testimonials,
        "case_studies": case_studies,
    });
    hb.render("home", &ctx)
}

pub fn render_case_studies(
    hb: &Handlebars<'static>,
    case_studies: &[case_study::Model],
) -> Result<String, handlebars::RenderError> {
    hb.render("case_studies", &json!({ "case_studies": case_studies }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_service(title: &str) -> service_item::Model {
        let now = Utc::now().into();
        service_item::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: Some("desc".into()),
            icon: None,
            sort_order: 1,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_case_study(title: &str) -> case_study::Model {
        let now = Utc::now().into();
        case_study::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            summary: None,
            client_name: Some("Acme".into()),
            sort_order: 1,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn home_renders_section_content() {
        let hb = get_handlebars().unwrap();
        let services = vec![sample_service("Brand Identity")];
        let out = render_home(&hb, &services, &[], &[], &[], &[]).unwrap();
        assert!(out.contains("Brand Identity"));
        assert!(out.contains("id=\"services\""));
        assert!(out.contains("id=\"process\""));
        assert!(out.contains("id=\"team\""));
        assert!(out.contains("id=\"testimonials\""));
        assert!(out.contains("id=\"case-studies\""));
    }

    #[test]
    fn home_renders_with_everything_empty() {
        let hb = get_handlebars().unwrap();
        let out = render_home(&hb, &[], &[], &[], &[], &[]).unwrap();
        assert!(out.contains("<h2>Services</h2>"));
        assert!(!out.contains("<article class=\"service\">"));
    }

    #[test]
    fn case_studies_page_lists_entries() {
        let hb = get_handlebars().unwrap();
        let rows = vec![sample_case_study("Platform Relaunch")];
        let out = render_case_studies(&hb, &rows).unwrap();
        assert!(out.contains("Platform Relaunch"));
        assert!(out.contains("Acme"));
    }

    #[test]
    fn html_in_content_is_escaped() {
        let hb = get_handlebars().unwrap();
        let services = vec![sample_service("<script>alert(1)</script>")];
        let out = render_home(&hb, &services, &[], &[], &[], &[]).unwrap();
        assert!(!out.contains("<script>alert(1)</script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
