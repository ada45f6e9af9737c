/// Known spellings of common technologies and how we display them.
///
/// Keys are lower-case. Canonical values are not keys themselves, so feeding a
/// normalized label back through `normalize` is not guaranteed to be stable.
const TECH_ALIASES: &[(&str, &str)] = &[
    ("reactjs", "React"),
    ("react.js", "React"),
    ("react-js", "React"),
    ("nodejs", "Node.js"),
    ("node.js", "Node.js"),
    ("node-js", "Node.js"),
    ("nextjs", "Next.js"),
    ("next.js", "Next.js"),
    ("next-js", "Next.js"),
    ("vuejs", "Vue.js"),
    ("vue.js", "Vue.js"),
    ("vue-js", "Vue.js"),
    ("typescript", "TypeScript"),
    ("javascript", "JavaScript"),
    ("html5", "HTML5"),
    ("css3", "CSS3"),
    ("scss", "SASS"),
    ("sass", "SASS"),
    ("mongodb", "MongoDB"),
    ("postgresql", "PostgreSQL"),
    ("postgres", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("redis", "Redis"),
    ("graphql", "GraphQL"),
    ("rest-api", "REST API"),
    ("restapi", "REST API"),
    ("github-actions", "GitHub Actions"),
    ("githubactions", "GitHub Actions"),
    ("ci-cd", "CI/CD"),
    ("cicd", "CI/CD"),
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("gcp", "Google Cloud"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("k8s", "Kubernetes"),
    ("terraform", "Terraform"),
    ("express", "Express.js"),
    ("expressjs", "Express.js"),
    ("fastify", "Fastify"),
    ("elysia", "ElysiaJS"),
    ("elysiajs", "ElysiaJS"),
    ("bun", "Bun"),
    ("prisma", "Prisma"),
    ("tailwind", "Tailwind CSS"),
    ("tailwindcss", "Tailwind CSS"),
    ("tailwind-css", "Tailwind CSS"),
    ("vite", "Vite"),
    ("webpack", "Webpack"),
    ("jest", "Jest"),
    ("vitest", "Vitest"),
    ("cypress", "Cypress"),
    ("playwright", "Playwright"),
    ("python", "Python"),
    ("java", "Java"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("csharp", "C#"),
    ("c++", "C++"),
    ("cpp", "C++"),
    ("c", "C"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    ("dart", "Dart"),
    ("flutter", "Flutter"),
    ("react-native", "React Native"),
    ("reactnative", "React Native"),
];

/// Words that keep a fixed spelling when we fall back to title-casing
const FIXED_WORDS: &[(&str, &str)] = &[
    ("api", "API"),
    ("ui", "UI"),
    ("ux", "UX"),
    ("js", "JS"),
    ("ts", "TS"),
    ("css", "CSS"),
    ("html", "HTML"),
    ("sql", "SQL"),
    ("nosql", "NoSQL"),
];

/// Turn a raw topic or language name into a display label.
///
/// `"React.js"` → `"React"`, `"node-js"` → `"Node.js"`,
/// `"api-gateway"` → `"API Gateway"`, `"my-custom-lib"` → `"My Custom Lib"`.
pub fn normalize(raw: &str) -> String {
    let key = raw.trim().to_lowercase();

    if let Some((_, canonical)) = TECH_ALIASES.iter().find(|(alias, _)| *alias == key) {
        return (*canonical).to_string();
    }

    raw.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(format_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((_, fixed)) = FIXED_WORDS.iter().find(|(w, _)| *w == lower) {
        return (*fixed).to_string();
    }

    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
