//! Site bundles written to temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PASSING_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>DevOps Portfolio - Firman Arya</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <header>
    <nav aria-label="Main navigation">
      <a href="#hero">Home</a>
      <a href="#about">About</a>
      <a href="#skills">Skills</a>
      <a href="#projects">Projects</a>
      <a href="#contact">Contact</a>
    </nav>
    <button class="menu-toggle" aria-label="Toggle menu">Menu</button>
  </header>
  <main>
    <section id="hero"><h1>Firman Arya</h1><img src="avatar.png" alt="Portrait of Firman"></section>
    <section id="about"><p>Platform engineer.</p></section>
    <section id="skills"><ul><li>Kubernetes</li><li>Terraform</li></ul></section>
    <section id="projects">
      <a href="https://github.com/example/infra" target="_blank" rel="noopener noreferrer">Infra</a>
    </section>
    <section id="contact"><a href="mailto:hello@example.com">Email</a></section>
  </main>
  <footer><p>2024</p></footer>
  <script src="script.js"></script>
</body>
</html>
"##;

pub const PASSING_CSS: &str = r#":root { --accent: #0af; }
.skills { display: grid; grid-template-columns: repeat(3, 1fr); }
nav { display: flex; backdrop-filter: blur(8px); }
.card { transition: transform 0.3s ease; will-change: transform; }
.card:hover { transform: translateY(-4px); }
.hero h1 { animation: fade-in 1s ease-out; }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@media (max-width: 768px) {
  .skills { grid-template-columns: 1fr; }
}
"#;

pub const PASSING_JS: &str = r#"document.addEventListener('DOMContentLoaded', () => {
  const toggle = document.querySelector('.menu-toggle');
  const nav = document.querySelector('nav');
  let open = false;

  toggle.addEventListener('click', () => {
    open = !open;
    nav.classList.toggle('open', open);
  });

  window.addEventListener('scroll', () => {
    document.querySelector('header').classList.toggle('scrolled', window.scrollY > 10);
  });
});
"#;

/// A site directory that passes every check until modified
pub struct SiteFixture {
    dir: TempDir,
}

impl SiteFixture {
    /// A complete, passing site
    pub fn passing() -> Self {
        let fixture = Self::empty();
        fixture.write("index.html", PASSING_HTML);
        fixture.write("styles.css", PASSING_CSS);
        fixture.write("script.js", PASSING_JS);
        fixture
    }

    /// An existing but empty site directory
    pub fn empty() -> Self {
        SiteFixture {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A path inside the fixture that does not exist
    pub fn missing_root(&self) -> PathBuf {
        self.dir.path().join("no-such-site")
    }

    pub fn write(&self, file: &str, content: impl AsRef<[u8]>) -> &Self {
        fs::write(self.dir.path().join(file), content).expect("write fixture file");
        self
    }

    pub fn remove(&self, file: &str) -> &Self {
        fs::remove_file(self.dir.path().join(file)).expect("remove fixture file");
        self
    }

    /// Rewrite the markup with `from` replaced by `to`
    pub fn edit_html(&self, from: &str, to: &str) -> &Self {
        assert!(PASSING_HTML.contains(from), "fixture markup lacks {:?}", from);
        self.write("index.html", PASSING_HTML.replace(from, to))
    }
}
