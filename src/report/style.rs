// src/report/style.rs

//! Embedded stylesheet for the report document.

pub(crate) const CSS: &str = r#"
    <style>
      :root{
        --blue:#7CB8FF; --red:#F4A6A6; --grey:#eef1f5;
        --ink:#0B1B2B; --muted:#556070; --link:#0B57D0; --bg:#fbfcfe;
      }
      html, body { height:100%; }
      body { margin:0; color:var(--ink); font-family:-apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; background:#fff; }

      .banner { width:100%; max-height:120px; object-fit:cover; display:block; }

      /* Layout with fixed left sidebar */
      .layout { display:flex; min-height:100vh; }
      .sidebar {
        position:sticky; top:0; align-self:flex-start;
        width:220px; min-height:100vh; padding:18px 16px 28px; background:var(--bg);
        border-right:1px solid #eef0f2;
      }
      .sidebar h3 { margin:8px 0 10px; font-size:14px; color:#223; }
      .sidebar a { display:block; padding:8px 8px; margin:4px 0; text-decoration:none; color:var(--link); border-radius:8px; }
      .sidebar a:hover { background:#eef6ff; }
      .content { flex:1; padding:16px 24px 40px; }

      h1 { margin:14px 0 18px; font-size:26px; }
      h2 { margin-top:28px; font-size:18px; }
      h3 { margin-top:16px; font-size:15px; }
      p { line-height:1.55; }
      .muted, .footer { color:var(--muted); }
      .tiny { font-size:11px; color:#66707a; }

      .callout {
        background:#f0f7ff; border-left:4px solid #005599; padding:12px 14px; border-radius:6px; margin:14px 0;
      }

      table { width:100%; border-collapse:collapse; margin-top:10px; }
      th, td { padding:8px 10px; border-bottom:1px solid #eee; text-align:left; font-size:13px; }
      th { background:#f6f6f6; }

      .ok-row { background:#EAF5FF; }
      .blocked-row { background:#FDECEC; }

      .legend2 div { margin:4px 0; }
      .chip { display:inline-block; width:12px; height:12px; border-radius:3px; margin-right:6px; vertical-align:middle; background:#e5e7eb; }
      .chip.ok { background:var(--blue); }
      .chip.blocked { background:var(--red); }

      .kpi { display:flex; align-items:center; gap:18px; flex-wrap:wrap; }
      .pie { width:160px; height:160px; }
      .vendor-title { margin-top:22px; font-size:16px; font-weight:600; }

      .footer { margin-top:28px; padding-top:12px; border-top:1px solid #e5e5e5; }
    </style>
"#;
