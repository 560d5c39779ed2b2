use crate::guide::GuideState;
use crate::persona::Persona;
use crate::resource::Resource;
use crate::stage::Stage;

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape text for interpolation into HTML. Every user-editable string goes
/// through here before it reaches a template.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Section templates
//
// Pure string builders: records in, HTML out. No I/O, no shared state —
// the server and the CLI `render` command both call these.
// ---------------------------------------------------------------------------

pub fn persona_card(persona: &Persona) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<article class=\"persona\" id=\"persona-{}\">\n<h3>{}</h3>\n",
        escape_html(&persona.slug),
        escape_html(&persona.title)
    ));
    if let Some(summary) = &persona.role_summary {
        html.push_str(&format!("<p class=\"summary\">{}</p>\n", escape_html(summary)));
    }
    if let Some(lob) = &persona.lob {
        html.push_str(&format!("<p class=\"lob\">{}</p>\n", escape_html(lob)));
    }
    if !persona.concerns.is_empty() {
        html.push_str("<h4>Top concerns</h4>\n<ul>\n");
        for concern in &persona.concerns {
            html.push_str(&format!("<li>{}</li>\n", escape_html(concern)));
        }
        html.push_str("</ul>\n");
    }
    if !persona.talking_points.is_empty() {
        html.push_str("<h4>Talking points</h4>\n<ul>\n");
        for point in &persona.talking_points {
            html.push_str(&format!("<li>{}</li>\n", escape_html(point)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</article>\n");
    html
}

pub fn stage_section(stage: &Stage, resources: &[Resource]) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<section class=\"stage\" id=\"stage-{}\">\n<h3>{}</h3>\n<p>{}</p>\n",
        stage.key,
        escape_html(&stage.title),
        escape_html(&stage.summary)
    ));
    if !stage.questions.is_empty() {
        html.push_str("<h4>Discovery questions</h4>\n<ol>\n");
        for q in &stage.questions {
            html.push_str(&format!("<li>{}</li>\n", escape_html(q)));
        }
        html.push_str("</ol>\n");
    }
    if !stage.objections.is_empty() {
        html.push_str("<h4>Objections</h4>\n<dl>\n");
        for o in &stage.objections {
            html.push_str(&format!(
                "<dt>{}</dt>\n<dd>{}</dd>\n",
                escape_html(&o.objection),
                escape_html(&o.response)
            ));
        }
        html.push_str("</dl>\n");
    }
    let linked: Vec<&Resource> = stage
        .resource_ids
        .iter()
        .filter_map(|id| resources.iter().find(|r| &r.id == id))
        .collect();
    if !linked.is_empty() {
        html.push_str("<h4>Resources</h4>\n<ul>\n");
        for r in linked {
            html.push_str(&resource_link(r));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");
    html
}

fn resource_link(resource: &Resource) -> String {
    let tags = if resource.tags.is_empty() {
        String::new()
    } else {
        format!(
            " <span class=\"tags\">[{}]</span>",
            escape_html(&resource.tags.join(", "))
        )
    };
    format!(
        "<li><a href=\"{}\">{}</a> <em>{}</em>{}</li>\n",
        escape_html(&resource.url),
        escape_html(&resource.title),
        resource.resource_type,
        tags
    )
}

pub fn resource_list(resources: &[Resource]) -> String {
    if resources.is_empty() {
        return "<p class=\"empty\">No resources yet.</p>\n".to_string();
    }
    let mut html = String::from("<ul class=\"resources\">\n");
    for r in resources {
        html.push_str(&resource_link(r));
    }
    html.push_str("</ul>\n");
    html
}

// ---------------------------------------------------------------------------
// Full page
// ---------------------------------------------------------------------------

const STYLE: &str = "body{font-family:sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem}\
article.persona,section.stage{border:1px solid #ddd;border-radius:6px;padding:1rem;margin:1rem 0}\
h1{border-bottom:2px solid #333}.tags{color:#666}.empty{color:#999}";

/// The whole guide as a single static page: personas, then the stage
/// walkthrough, then the resource library. Empty sections render as empty
/// blocks rather than failing.
pub fn guide_page(title: &str, state: &GuideState, resources: &[Resource]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

    html.push_str("<h2>Personas</h2>\n");
    if state.personas.is_empty() {
        html.push_str("<p class=\"empty\">No personas yet.</p>\n");
    }
    for persona in &state.personas {
        html.push_str(&persona_card(persona));
    }

    html.push_str("<h2>Sales cycle</h2>\n");
    for stage in &state.stages {
        html.push_str(&stage_section(stage, resources));
    }

    html.push_str("<h2>Resource library</h2>\n");
    html.push_str(&resource_list(resources));

    html.push_str("</body>\n</html>\n");
    html
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
