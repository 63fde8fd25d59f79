use crate::charts::{self, ChartSpec};
use crate::error::Result;

/// plotly.js bundle used to draw the figures in the browser
pub const PLOTLY_JS_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const PAGE_TITLE: &str = "Company Growth Analysis";

const PRIMARY_COLOR: &str = "#1f77b4";
const SECONDARY_COLOR: &str = "#003366";

/// One section per chart: heading text, heading colour, description.
const SECTIONS: [(&str, &str, &str); 5] = [
    (
        charts::YEARLY_TITLE,
        PRIMARY_COLOR,
        "This bar chart shows how our sales figures have grown over the years across different regions. It provides a clear comparison year-over-year.",
    ),
    (
        "2. Monthly Sales Trend",
        SECONDARY_COLOR,
        "This line chart highlights how sales fluctuated over the year, giving insights into seasonality and business cycles.",
    ),
    (
        charts::PRODUCT_TITLE,
        PRIMARY_COLOR,
        "This pie chart visualizes the contribution of each product category to the total sales, giving insight into our top-performing products.",
    ),
    (
        charts::SCATTER_TITLE,
        PRIMARY_COLOR,
        "This scatter plot explores the relationship between sales and profit for different regions, highlighting areas of strength and opportunity.",
    ),
    (
        charts::HEATMAP_TITLE,
        PRIMARY_COLOR,
        "The heatmap illustrates the correlation between sales and profit, helping us understand the strength and direction of these relationships.",
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Title { text: String, style: String },
    Heading { text: String, color: String },
    Paragraph(String),
    Graph(ChartSpec),
    Break,
}

/// The whole page: a styled container around an ordered list of nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub style: String,
    pub nodes: Vec<Node>,
}

impl PageLayout {
    pub fn graphs(&self) -> impl Iterator<Item = &ChartSpec> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Graph(spec) => Some(spec),
            _ => None,
        })
    }
}

/// Title block, then (heading, paragraph, graph, break) per chart, in the
/// order the charts are given.
pub fn build_layout(charts: Vec<ChartSpec>) -> PageLayout {
    let mut nodes = vec![
        Node::Title {
            text: PAGE_TITLE.to_string(),
            style: format!("text-align: center; color: {PRIMARY_COLOR}; font-size: 40px"),
        },
        Node::Break,
    ];
    for (chart, (heading, color, paragraph)) in charts.into_iter().zip(SECTIONS) {
        nodes.push(Node::Heading {
            text: heading.to_string(),
            color: color.to_string(),
        });
        nodes.push(Node::Paragraph(paragraph.to_string()));
        nodes.push(Node::Graph(chart));
        nodes.push(Node::Break);
    }
    PageLayout {
        style: "font-family: Arial, sans-serif; background-color: #f9f9f9; padding: 20px"
            .to_string(),
        nodes,
    }
}

/// Render the layout as a complete HTML document.
pub fn render_html(layout: &PageLayout) -> Result<String> {
    let mut body = String::new();
    let mut scripts = String::new();
    for node in &layout.nodes {
        match node {
            Node::Title { text, style } => {
                body.push_str(&format!(
                    "    <h1 style=\"{}\">{}</h1>\n",
                    escape_html(style),
                    escape_html(text)
                ));
            }
            Node::Heading { text, color } => {
                body.push_str(&format!(
                    "    <h2 style=\"color: {}\">{}</h2>\n",
                    escape_html(color),
                    escape_html(text)
                ));
            }
            Node::Paragraph(text) => {
                body.push_str(&format!("    <p>{}</p>\n", escape_html(text)));
            }
            Node::Graph(spec) => {
                body.push_str(&format!(
                    "    <div id=\"{}\" class=\"graph\"></div>\n",
                    escape_html(spec.id)
                ));
                let figure = serde_json::to_string(&spec.figure())?;
                scripts.push_str(&format!(
                    "    Plotly.newPlot(\"{}\", {});\n",
                    spec.id,
                    escape_script(&figure)
                ));
            }
            Node::Break => body.push_str("    <br>\n"),
        }
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{cdn}"></script>
</head>
<body style="margin: 0">
<div style="{style}">
{body}</div>
<script>
{scripts}</script>
</body>
</html>
"#,
        title = escape_html(PAGE_TITLE),
        cdn = PLOTLY_JS_CDN,
        style = escape_html(&layout.style),
        body = body,
        scripts = scripts,
    ))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON inside a `<script>` element must not contain `</`.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
