//! Welcome project written into an empty store on first start.

use prism_primitives::{FileId, FileRecord};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Prism</title>
  <link rel="stylesheet" href="style.css">
</head>
<body>
  <main class="card">
    <h1>Welcome to Prism</h1>
    <p>Edit <code>index.html</code>, <code>style.css</code> or <code>script.js</code>
      and the preview follows along.</p>
    <button id="greet">Say hello</button>
    <p id="output"></p>
  </main>
  <script src="script.js"></script>
</body>
</html>
"#;

const STYLE_CSS: &str = r#"* {
  box-sizing: border-box;
}

body {
  background: #1e2127;
  color: #abb2bf;
  display: grid;
  min-height: 100vh;
  place-items: center;
}

.card {
  background: #282c34;
  border-radius: 8px;
  max-width: 32rem;
  padding: 2rem;
}

h1 {
  color: #61afef;
  margin-top: 0;
}

button {
  background: #98c379;
  border: none;
  border-radius: 4px;
  color: #1e2127;
  cursor: pointer;
  padding: 0.5rem 1rem;
}
"#;

const SCRIPT_JS: &str = r#"const button = document.getElementById('greet');
const output = document.getElementById('output');
let clicks = 0;

button.addEventListener('click', () => {
  clicks += 1;
  output.textContent = `Hello from the preview! (${clicks})`;
});
"#;

/// Files of the welcome project, entry file first.
pub fn default_records() -> Vec<FileRecord> {
	vec![
		FileRecord::new(FileId::from_static("index.html"), INDEX_HTML),
		FileRecord::new(FileId::from_static("style.css"), STYLE_CSS),
		FileRecord::new(FileId::from_static("script.js"), SCRIPT_JS),
	]
}
