//! Landing page served at `/`.

/// Single-page form that posts to `/api/v1/generate` and shows the
/// returned source as plain text.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>movesmith</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
    label { display: block; margin-top: .75rem; }
    input, select { width: 100%; padding: .4rem; }
    button { margin-top: 1rem; padding: .5rem 1.5rem; }
    pre { background: #f4f4f4; padding: 1rem; overflow-x: auto; white-space: pre; }
  </style>
</head>
<body>
  <h1>movesmith</h1>
  <p>Generate a Move contract skeleton.</p>
  <form id="generate">
    <label>Contract type
      <select name="intent">
        <option value="token">Token</option>
        <option value="nft">NFT</option>
        <option value="marketplace">Marketplace</option>
        <option value="module">Module</option>
      </select>
    </label>
    <label>Name <input name="name" placeholder="default for the chosen type"></label>
    <label>Address <input name="address" placeholder="0x1"></label>
    <button type="submit">Generate</button>
  </form>
  <pre id="output"></pre>
  <script>
    document.getElementById("generate").addEventListener("submit", async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const params = {};
      for (const key of ["name", "address"]) {
        const value = form.get(key);
        if (value) params[key] = value;
      }
      const response = await fetch("/api/v1/generate", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ intent: form.get("intent"), params }),
      });
      const body = await response.json();
      document.getElementById("output").textContent = body.code;
    });
  </script>
</body>
</html>
"#;
