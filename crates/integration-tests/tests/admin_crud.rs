//! Integration tests for the admin CRUD surface: services, images,
//! contact inbox, and uploads.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;

use santalena_integration_tests::{TestContext, body_json};

#[tokio::test]
async fn test_service_crud_lifecycle() {
    let ctx = TestContext::new().await;
    let cookie = ctx.login().await;

    // Create
    let response = ctx
        .send_json(
            "POST",
            "/api/admin/services",
            &json!({
                "title": "Drenagem Linfática",
                "description": "Estimula o sistema linfático.",
                "icon": "droplet",
                "duration": "60 min",
                "price": "R$ 130",
            }),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().expect("numeric id");
    assert_eq!(created["title"], "Drenagem Linfática");
    assert_eq!(created["active"], true);
    assert!(created["createdAt"].is_string());

    // Read
    let response = ctx
        .get_with_cookie(&format!("/api/admin/services/{id}"), &cookie)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update: only the price changes
    let response = ctx
        .send_json(
            "PUT",
            &format!("/api/admin/services/{id}"),
            &json!({ "price": "R$ 150" }),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["price"], "R$ 150");
    assert_eq!(updated["title"], "Drenagem Linfática");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // Delete
    let response = ctx
        .send_json(
            "DELETE",
            &format!("/api/admin/services/{id}"),
            &json!({}),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx
        .get_with_cookie(&format!("/api/admin/services/{id}"), &cookie)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_service_create_validation() {
    let ctx = TestContext::new().await;
    let cookie = ctx.login().await;

    let response = ctx
        .send_json(
            "POST",
            "/api/admin/services",
            &json!({
                "title": "",
                "description": "d",
                "icon": "  ",
                "duration": "50 min",
                "price": "R$ 100",
            }),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, vec!["title", "icon"]);
}

#[tokio::test]
async fn test_service_unknown_id_is_404() {
    let ctx = TestContext::new().await;
    let cookie = ctx.login().await;

    let response = ctx.get_with_cookie("/api/admin/services/9999", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = ctx
        .send_json(
            "PUT",
            "/api/admin/services/9999",
            &json!({ "price": "R$ 1" }),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = ctx
        .send_json("DELETE", "/api/admin/services/9999", &json!({}), Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_image_crud_and_update_ordering() {
    let ctx = TestContext::new().await;
    let cookie = ctx.login().await;

    let mut ids = Vec::new();
    for url in ["/uploads/images/a.jpg", "/uploads/images/b.jpg"] {
        let response = ctx
            .send_json(
                "POST",
                "/api/admin/images",
                &json!({ "section": "gallery", "imageUrl": url }),
                Some(&cookie),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        ids.push(body_json(response).await["id"].as_i64().expect("id"));
    }

    // Newest update first: touching the first image moves it to the front
    let response = ctx
        .send_json(
            "PUT",
            &format!("/api/admin/images/{}", ids[0]),
            &json!({ "title": "Sala de massagem" }),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(ctx.get_with_cookie("/api/admin/images", &cookie).await).await;
    let images = body.as_array().expect("array of images");
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["id"].as_i64(), Some(ids[0]));
    assert_eq!(images[0]["title"], "Sala de massagem");

    // Delete
    let response = ctx
        .send_json(
            "DELETE",
            &format!("/api/admin/images/{}", ids[1]),
            &json!({}),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(ctx.get("/api/images/gallery").await).await;
    assert_eq!(body.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn test_image_create_validation() {
    let ctx = TestContext::new().await;
    let cookie = ctx.login().await;

    let response = ctx
        .send_json(
            "POST",
            "/api/admin/images",
            &json!({ "section": "", "imageUrl": "" }),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, vec!["section", "imageUrl"]);
}

#[tokio::test]
async fn test_mark_contact_message_read_is_idempotent() {
    let ctx = TestContext::new().await;

    let response = ctx
        .send_json(
            "POST",
            "/api/contact",
            &json!({
                "name": "Ana Souza",
                "email": "ana@example.com",
                "phone": "11999990000",
                "service": "relaxing",
                "message": "I would like to book a session.",
            }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().expect("id");

    let cookie = ctx.login().await;
    for _ in 0..2 {
        let response = ctx
            .send_json(
                "PUT",
                &format!("/api/admin/contact-messages/{id}/read"),
                &json!({}),
                Some(&cookie),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["read"], true);
    }

    let response = ctx
        .send_json(
            "PUT",
            "/api/admin/contact-messages/9999/read",
            &json!({}),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Build a multipart body with a single field.
fn multipart_body(boundary: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; \
             filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

#[tokio::test]
async fn test_upload_image_stores_file_and_returns_url() {
    let ctx = TestContext::new().await;
    let cookie = ctx.login().await;

    let boundary = "------------------------test-boundary";
    let png_header: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    let body = multipart_body(boundary, "photo.PNG", "image/png", png_header);

    let request = Request::post("/api/admin/upload-image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(header::COOKIE, &cookie)
        .body(Body::from(body))
        .expect("valid request");

    let response = ctx.send(request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let image_url = body["imageUrl"].as_str().expect("imageUrl");
    let filename = body["filename"].as_str().expect("filename");
    assert!(image_url.starts_with("/uploads/images/"));
    assert!(filename.ends_with(".png"), "extension is lowercased");
    assert_eq!(image_url, format!("/uploads/images/{filename}"));

    let stored = ctx.uploads_dir().join("images").join(filename);
    let data = std::fs::read(&stored).expect("uploaded file exists");
    assert_eq!(data, png_header);
}

#[tokio::test]
async fn test_upload_rejects_non_image_payloads() {
    let ctx = TestContext::new().await;
    let cookie = ctx.login().await;

    let boundary = "------------------------test-boundary";
    let body = multipart_body(boundary, "notes.txt", "text/plain", b"not an image");

    let request = Request::post("/api/admin/upload-image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(header::COOKIE, &cookie)
        .body(Body::from(body))
        .expect("valid request");

    let response = ctx.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_requires_authentication() {
    let ctx = TestContext::new().await;

    let boundary = "------------------------test-boundary";
    let body = multipart_body(boundary, "photo.png", "image/png", &[0x89]);

    let request = Request::post("/api/admin/upload-image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .expect("valid request");

    let response = ctx.send(request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
