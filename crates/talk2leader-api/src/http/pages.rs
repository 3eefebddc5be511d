//! Server-rendered HTML for the landing and chat pages.
//!
//! Pages are assembled from string fragments. All user-controlled text
//! (leader names, biography summaries, URLs) is HTML-escaped before it
//! reaches the document.

use html_escape::{encode_double_quoted_attribute, encode_text};

use talk2leader_types::leader::LeaderInfo;

/// Leaders suggested on the landing page.
pub const FEATURED_LEADERS: &[&str] = &[
    "Napoleon",
    "Abraham Lincoln",
    "Winston Churchill",
    "Mahatma Gandhi",
    "Cleopatra",
    "Julius Caesar",
    "Queen Victoria",
    "Nelson Mandela",
];

const STYLE: &str = r#"
body { font-family: Georgia, serif; margin: 0; background: #f6f3ee; color: #222; }
header { background: #2c3e50; color: #fff; padding: 1rem 2rem; }
header a { color: #fff; text-decoration: none; }
main { max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
.leaders { display: flex; flex-wrap: wrap; gap: .5rem; list-style: none; padding: 0; }
.leaders a { display: block; padding: .5rem 1rem; background: #fff; border: 1px solid #ccc; border-radius: 4px; color: #2c3e50; text-decoration: none; }
.bio { background: #fff; border-left: 4px solid #2c3e50; padding: 1rem; margin-bottom: 1rem; }
.bio.missing { border-left-color: #b94a48; color: #555; }
#messages { background: #fff; border: 1px solid #ccc; min-height: 16rem; max-height: 28rem; overflow-y: auto; padding: 1rem; }
.turn { margin: .5rem 0; }
.turn.user { text-align: right; }
.turn .text { display: inline-block; padding: .5rem .75rem; border-radius: 6px; background: #e8eef4; white-space: pre-wrap; }
.turn.user .text { background: #d5f0d5; }
.turn.error .text { background: #f8d7da; }
form { display: flex; gap: .5rem; margin-top: 1rem; }
form input[type=text] { flex: 1; padding: .5rem; }
"#;

const CHAT_SCRIPT: &str = r#"
(function () {
  const root = document.getElementById('chat');
  const leader = root.dataset.leader;
  const historyUrl = '/api/chat_history/' + encodeURIComponent(leader);
  const messages = document.getElementById('messages');
  const form = document.getElementById('chat-form');
  const input = document.getElementById('message');
  let history = [];

  function render() {
    messages.innerHTML = '';
    for (const turn of history) {
      const row = document.createElement('div');
      row.className = 'turn ' + (turn.role || 'assistant');
      const text = document.createElement('span');
      text.className = 'text';
      text.textContent = turn.text || '';
      row.appendChild(text);
      messages.appendChild(row);
    }
    messages.scrollTop = messages.scrollHeight;
  }

  function savedTurns() {
    return history.filter(function (turn) { return turn.role !== 'error'; });
  }

  async function save() {
    await fetch(historyUrl, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ history: savedTurns() })
    });
  }

  async function load() {
    const res = await fetch(historyUrl);
    if (res.ok) {
      history = await res.json();
      render();
    }
  }

  form.addEventListener('submit', async function (event) {
    event.preventDefault();
    const message = input.value.trim();
    if (!message) return;
    input.value = '';
    history.push({ role: 'user', text: message });
    render();

    const res = await fetch('/api/chat', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ message: message, leader_name: leader })
    });
    const body = await res.json();
    if (res.ok) {
      history.push({ role: 'assistant', text: body.response, timestamp: body.timestamp });
      await save();
    } else {
      history.push({ role: 'error', text: body.error || 'Something went wrong.' });
    }
    render();
  });

  document.getElementById('clear').addEventListener('click', async function () {
    await fetch(historyUrl, { method: 'DELETE' });
    history = [];
    render();
  });

  load();
})();
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <header><a href=\"/\">Talk2Leader</a></header>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = encode_text(title),
    )
}

/// Path of the chat page for `leader`, percent-encoded as one segment.
pub fn chat_path(leader: &str) -> String {
    format!("/chat/{}", urlencoding::encode(leader))
}

/// Landing page: a name form plus suggested leaders.
pub fn render_home() -> String {
    let links: String = FEATURED_LEADERS
        .iter()
        .map(|name| {
            format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                encode_double_quoted_attribute(&chat_path(name)),
                encode_text(name)
            )
        })
        .collect();

    let body = format!(
        "<h1>Talk to a historical leader</h1>\n\
         <form id=\"leader-form\">\n\
         <input type=\"text\" id=\"leader\" placeholder=\"Enter a leader's name\" required>\n\
         <button type=\"submit\">Start chatting</button>\n</form>\n\
         <h2>Suggested leaders</h2>\n<ul class=\"leaders\">\n{links}</ul>\n\
         <script>\n\
         document.getElementById('leader-form').addEventListener('submit', function (event) {{\n\
           event.preventDefault();\n\
           const name = document.getElementById('leader').value.trim();\n\
           if (name) window.location.href = '/chat/' + encodeURIComponent(name);\n\
         }});\n\
         </script>"
    );

    layout("Talk2Leader", &body)
}

/// Chat page for `leader`, with a biography card when one was found.
pub fn render_chat(leader: &str, info: Option<&LeaderInfo>) -> String {
    let bio = match info {
        Some(info) => format!(
            "<section class=\"bio\">\n<h2>{name}</h2>\n<p>{summary}</p>\n\
             <a href=\"{url}\" target=\"_blank\" rel=\"noopener\">Read more on Wikipedia</a>\n</section>",
            name = encode_text(&info.name),
            summary = encode_text(&info.summary),
            url = encode_double_quoted_attribute(&info.wiki_url),
        ),
        None => format!(
            "<section class=\"bio missing\">\n<p>No biography found for {}.</p>\n</section>",
            encode_text(leader)
        ),
    };

    let body = format!(
        "<div id=\"chat\" data-leader=\"{leader_attr}\">\n\
         <h1>Chat with {leader_text}</h1>\n{bio}\n\
         <div id=\"messages\"></div>\n\
         <form id=\"chat-form\">\n\
         <input type=\"text\" id=\"message\" placeholder=\"Ask something...\" autocomplete=\"off\">\n\
         <button type=\"submit\">Send</button>\n\
         <button type=\"button\" id=\"clear\">Clear history</button>\n</form>\n</div>\n\
         <script>{CHAT_SCRIPT}</script>",
        leader_attr = encode_double_quoted_attribute(leader),
        leader_text = encode_text(leader),
    );

    layout(&format!("Chat with {leader}"), &body)
}
