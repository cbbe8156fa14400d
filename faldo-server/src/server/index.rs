use axum::{Router, response::Html, routing::get};

use super::Context;

const INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>faldo</title>
</head>
<body>
  <h1>faldo</h1>
  <p>A SPARQL endpoint that answers genomic range queries over a set of features.</p>

  <h2>Usage</h2>
  <p>Send queries to <code>/sparql</code> using GET (<code>query</code> parameter) or POST
  (<code>query</code> form field). Results are returned as
  <code>application/sparql-results+json</code>.</p>

  <h3>Example query</h3>
  <pre>
PREFIX faldo: &lt;http://biohackathon.org/resource/faldo#&gt;

SELECT ?uniqueId ?start ?end ?name ?note ?strand ?type
WHERE {
  ?location faldo:reference &lt;http://example.org/chr1&gt; .
  FILTER ( (?start &gt;= 0) &amp;&amp; (?end &lt;= 100000) )
}
  </pre>

  <p>The reference sequence is taken from the last path segment of the
  <code>faldo:reference</code> object (default <code>chr1</code>). The range defaults to
  <code>0</code>&ndash;<code>1000000</code> when <code>?start &gt;=</code> or
  <code>?end &lt;=</code> is missing.</p>

  <h3>Sample features</h3>
  <p>Served when no annotations are given.</p>
  <ul>
    <li>gene001: 10000-20000 (GENE1, strand +1)</li>
    <li>gene002: 25000-35000 (GENE2, strand -1)</li>
    <li>gene003: 40000-50000 (GENE3, strand +1)</li>
    <li>gene004: 55000-65000 (GENE4, strand -1)</li>
    <li>gene005: 70000-80000 (GENE5, strand +1)</li>
  </ul>

  <p><a href="/sparql?query=SELECT%20%3FuniqueId%20%3Fstart%20%3Fend%20%3Fname%20WHERE%20%7B%20FILTER%20(%20(%3Fstart%20%3E%3D%200)%20%26%26%20(%3Fend%20%3C%3D%20100000)%20)%20%7D">Test query</a></p>
  <p><a href="/openapi.json">OpenAPI</a></p>
</body>
</html>
"#;

pub fn router() -> Router<Context> {
    Router::new().route("/", get(index))
}

/// Shows usage documentation.
async fn index() -> Html<&'static str> {
    Html(INDEX)
}
