use crate::utils::escape_xml;

const PAGE_STYLE: &str = "body { font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px; }";

fn page(title: &str, style: &str, body: &str) -> String {
    format!(
        r#"<html>
  <head>
    <title>{title}</title>
    <style>
      {page_style}
      {style}
    </style>
  </head>
  <body>
{body}
    <a href="/">← Back to site</a>
  </body>
</html>
"#,
        title = title,
        page_style = PAGE_STYLE,
        style = style,
        body = body,
    )
}

/// Shown when Spotify redirects back with an `error` parameter, or when the
/// server itself cannot build the authorization link.
pub fn error_page(message: &str) -> String {
    page(
        "Authorization Error",
        "",
        &format!(
            r#"    <h1>Authorization Error</h1>
    <p>Error: {}</p>"#,
            escape_xml(message)
        ),
    )
}

/// Landing page with a single link to Spotify's authorize endpoint.
pub fn authorize_page(authorize_url: &str) -> String {
    page(
        "Spotify Authorization",
        ".auth-link { background: #1db954; color: white; padding: 15px 30px; text-decoration: none; border-radius: 25px; display: inline-block; margin: 20px 0; }
      .auth-link:hover { background: #1ed760; }",
        &format!(
            r#"    <h1>🎵 Spotify Authorization Required</h1>
    <p>Click the button below to authorize your Spotify account:</p>
    <a href="{}" class="auth-link">🔗 Authorize Spotify Access</a>
    <p><small>This will redirect you back here with an authorization code.</small></p>"#,
            escape_xml(authorize_url)
        ),
    )
}

/// Shows the authorization code and the token request the operator has to
/// run by hand to obtain a refresh token.
///
/// The client secret is never rendered; the command carries a
/// `<client_secret>` placeholder instead.
pub fn code_page(code: &str, client_id: &str, redirect_uri: &str, token_url: &str) -> String {
    page(
        "Spotify Authorization",
        ".code { background: #f5f5f5; padding: 15px; border-radius: 5px; word-break: break-all; }
      .instructions { background: #e8f4fd; padding: 15px; border-radius: 5px; margin: 20px 0; }",
        &format!(
            r#"    <h1>✅ Authorization Successful!</h1>
    <p>Your authorization code:</p>
    <div class="code">{code}</div>
    <div class="instructions">
      <h3>Next steps:</h3>
      <p>1. Copy the code above</p>
      <p>2. Run this curl command in terminal:</p>
      <pre>{command}</pre>
      <p>3. Copy the "refresh_token" from the response</p>
      <p>4. Set it as SPOTIFY_REFRESH_TOKEN in the server environment</p>
    </div>"#,
            code = escape_xml(code),
            command = escape_xml(&token_command(code, client_id, redirect_uri, token_url)),
        ),
    )
}

/// The out-of-band `curl` call that trades an authorization code for tokens.
pub fn token_command(code: &str, client_id: &str, redirect_uri: &str, token_url: &str) -> String {
    format!(
        "curl -H \"Authorization: Basic $(echo -n '{client_id}:<client_secret>' | base64)\" \\\n\
         -d grant_type=authorization_code \\\n\
         -d code={code} \\\n\
         -d redirect_uri={redirect_uri} \\\n\
         {token_url}"
    )
}
