use crate::view::ArticleView;

/// Render the reading view for one article.
pub fn render_article(view: &ArticleView) -> String {
    let hero = match &view.hero_image {
        Some(image) => format!(
            r#"<div class="hero"><img src="{src}" alt="{alt}"><div class="hero-shade"></div></div>"#,
            src = html_escape(image),
            alt = html_escape(&view.title),
        ),
        None => String::new(),
    };

    let published = match &view.published {
        Some(date) => format!(
            r#"<time datetime="{raw}">{display}</time>"#,
            raw = html_escape(&date.raw),
            display = html_escape(&date.display),
        ),
        None => String::new(),
    };

    let mut body = String::new();
    if view.has_body() {
        body.push_str(r#"<div class="body">"#);
        if let Some(lede) = &view.lede {
            body.push_str(&format!(r#"<p class="lede">{}</p>"#, html_escape(lede)));
        }
        if !view.paragraphs.is_empty() {
            body.push_str(r#"<div class="prose">"#);
            for paragraph in &view.paragraphs {
                body.push_str(&format!("<p>{}</p>", html_escape(paragraph)));
            }
            body.push_str("</div>");
        }
        body.push_str("</div>");
    }

    let original = match &view.original_url {
        Some(url) => format!(
            r#"<div class="original"><a class="button" href="{}" target="_blank" rel="noopener noreferrer">Read original source &#8599;</a></div>"#,
            html_escape(url)
        ),
        None => String::new(),
    };

    let content = format!(
        r#"
<div class="container">
    <a class="back" href="/">&larr; Back to news</a>
    <article class="card">
        {hero}
        <div class="card-body">
            <div class="meta"><span class="source">{source}</span>{published}</div>
            <h1>{title}</h1>
            {body}
            {original}
        </div>
    </article>
</div>
"#,
        source = html_escape(&view.source),
        title = html_escape(&view.title),
    );

    build_page(&view.title, &content)
}

/// Render the static 404 page.
pub fn render_not_found() -> String {
    let content = r#"
<section class="not-found">
    <svg width="96" height="96" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
        <circle cx="12" cy="12" r="9" />
        <path d="M8 10h.01M16 10h.01" />
        <path d="M8 16c1.333-1 2.667-1 4 0 1.333 1 2.667 1 4 0" />
    </svg>
    <h1 class="gradient">404 &middot; Page Not Found</h1>
    <p>Looks like our detective couldn&rsquo;t find the page you&rsquo;re looking for. The trail may have gone cold or the URL is a little suspect.</p>
    <div class="actions">
        <a class="button" href="/">Back to Headlines</a>
        <a class="button secondary" href="/">Go Home</a>
    </div>
</section>
"#;

    build_page("Page Not Found", content)
}

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:#111827;color:#e5e7eb;min-height:100vh;}}
a{{color:inherit;}}
.container{{max-width:1024px;margin:0 auto;padding:32px 16px;}}
.back{{display:inline-block;margin-bottom:24px;font-size:14px;color:#d1d5db;text-decoration:none;}}
.back:hover{{color:#60a5fa;}}
.card{{max-width:768px;margin:0 auto;background:#1f2937;border:1px solid #374151;border-radius:16px;overflow:hidden;box-shadow:0 20px 25px -5px rgba(0,0,0,.4);}}
.hero{{position:relative;height:288px;overflow:hidden;}}
.hero img{{width:100%;height:100%;object-fit:cover;}}
.hero-shade{{position:absolute;inset:0;background:linear-gradient(to top,rgba(17,24,39,.7),transparent);}}
.card-body{{padding:40px;}}
.meta{{display:flex;flex-wrap:wrap;align-items:center;gap:12px;font-size:14px;color:#9ca3af;}}
.source{{padding:4px 10px;border-radius:9999px;background:rgba(55,65,81,.6);border:1px solid #4b5563;color:#e5e7eb;}}
h1{{margin-top:16px;font-size:44px;font-weight:800;line-height:1.15;letter-spacing:-.02em;color:#f3f4f6;}}
.body{{margin-top:32px;}}
.lede{{font-size:20px;line-height:32px;}}
.prose p{{margin-top:20px;font-size:19px;line-height:32px;color:#d1d5db;}}
.original{{margin-top:40px;}}
.button{{display:inline-block;padding:10px 20px;border-radius:9999px;background:linear-gradient(to right,#3b82f6,#a855f7);color:#fff;font-weight:600;text-decoration:none;}}
.button.secondary{{background:#1f2937;border:1px solid #374151;color:#e5e7eb;font-weight:500;}}
.not-found{{min-height:70vh;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center;max-width:576px;margin:0 auto;padding:0 24px;}}
.not-found svg{{color:#e5e7eb;margin-bottom:32px;}}
.not-found p{{margin-top:16px;color:#d1d5db;}}
.gradient{{font-size:36px;background:linear-gradient(to right,#60a5fa,#c084fc);-webkit-background-clip:text;background-clip:text;color:transparent;}}
.actions{{margin-top:32px;display:flex;gap:12px;justify-content:center;flex-wrap:wrap;}}
</style>
</head>
<body>
<main>
{content}
</main>
</body>
</html>"#,
        title = html_escape(title),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
