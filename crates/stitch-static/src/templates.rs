//! Template engine for rendering the landing page.

use minijinja::{context, Environment};

/// One card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProjectEntry {
    /// Display name
    pub name: String,
    /// Relative link target
    pub path: String,
    /// Short description
    pub desc: String,
}

/// Context for rendering the landing page.
#[derive(Debug, Clone)]
pub struct LandingContext {
    /// Page title
    pub title: String,
    /// Heading shown above the list
    pub heading: String,
    /// Projects to list
    pub projects: Vec<ProjectEntry>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the landing template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("landing.html", LANDING_TEMPLATE)
            .expect("Failed to add landing template");

        Self { env }
    }

    /// Render the landing page.
    pub fn render_landing(&self, context: &LandingContext) -> Result<String, crate::BuildError> {
        let tmpl = self.env.get_template("landing.html")?;

        let html = tmpl.render(context! {
            title => &context.title,
            heading => &context.heading,
            count => context.projects.len(),
            projects_js => projects_literal(&context.projects)?,
        })?;

        Ok(html)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize entries as a JavaScript array literal safe to inline in a
/// `<script>` element.
fn projects_literal(projects: &[ProjectEntry]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(projects)?;
    Ok(json.replace("</", "<\\/"))
}

const LANDING_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        body { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); min-height: 100vh; display: flex; align-items: center; justify-content: center; }
    </style>
</head>
<body>
    <div class="max-w-2xl mx-auto px-4">
        <div class="bg-white rounded-2xl shadow-2xl p-8">
            <h1 class="text-4xl font-bold text-center mb-2 text-slate-900">{{ heading }}</h1>
            <p class="text-center text-slate-600 mb-8">Standalone pages ({{ count }})</p>

            <div class="space-y-4" id="projectList"></div>

            <div class="mt-8 p-4 bg-blue-50 rounded-xl border border-blue-200">
                <p class="text-sm text-slate-700">
                    <strong>Tip:</strong> this page is generated.
                    Add a project folder with a <code class="bg-white px-2 py-1 rounded">parts/</code> directory and run <code class="bg-white px-2 py-1 rounded">stitch</code> to update the list.
                </p>
            </div>
        </div>
    </div>

    <script>
        const projects = {{ projects_js | safe }};

        const projectList = document.getElementById('projectList');

        if (projects.length === 0) {
            projectList.innerHTML = '<p class="text-slate-500 text-center py-8">No projects found.</p>';
        } else {
            projects.forEach(project => {
                const card = document.createElement('a');
                card.href = `./${project.path}/`;
                card.className = 'block p-6 border-2 border-slate-200 rounded-xl hover:border-blue-500 hover:shadow-lg transition-all group';

                const header = document.createElement('div');
                header.className = 'flex items-start justify-between mb-2';

                const name = document.createElement('h2');
                name.className = 'text-2xl font-bold text-slate-900 group-hover:text-blue-600 transition-colors';
                name.textContent = project.name;

                const arrow = document.createElement('span');
                arrow.className = 'text-2xl';
                arrow.textContent = '→';

                const desc = document.createElement('p');
                desc.className = 'text-slate-600';
                desc.textContent = project.desc;

                header.append(name, arrow);
                card.append(header, desc);
                projectList.appendChild(card);
            });
        }
    </script>
</body>
</html>
"##;
