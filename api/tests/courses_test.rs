mod helpers;

#[cfg(test)]
mod tests {
    use crate::helpers::{create_user, get_json_body, make_test_app, request};
    use axum::http::StatusCode;
    use db::models::user::Role;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn course_payload(title: &str) -> Value {
        json!({"title": title, "description": "Numbers and shapes", "subject": "Mathematics"})
    }

    #[tokio::test]
    async fn test_teacher_creates_course() {
        let app = make_test_app().await;
        let (teacher, token) = create_user(&app.state, "t@school.test", Role::Teacher).await;

        let response = app
            .router
            .oneshot(request("POST", "/api/courses", Some(&token), Some(&course_payload("Algebra"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["title"], "Algebra");
        assert_eq!(json["data"]["teacher_id"], teacher.id);
    }

    #[tokio::test]
    async fn test_student_cannot_create_course() {
        let app = make_test_app().await;
        let (_, token) = create_user(&app.state, "s@school.test", Role::Student).await;

        let response = app
            .router
            .oneshot(request("POST", "/api/courses", Some(&token), Some(&course_payload("Nope"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            get_json_body(response).await["message"],
            "Only teachers can perform this action"
        );
    }

    #[tokio::test]
    async fn test_unauthenticated_listing_is_rejected() {
        let app = make_test_app().await;
        let response = app
            .router
            .oneshot(request("GET", "/api/courses", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_empty_title_is_rejected() {
        let app = make_test_app().await;
        let (_, token) = create_user(&app.state, "t@school.test", Role::Teacher).await;

        let response = app
            .router
            .oneshot(request("POST", "/api/courses", Some(&token), Some(&course_payload(""))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_enrollment_flow() {
        let app = make_test_app().await;
        let (_, teacher_token) = create_user(&app.state, "t@school.test", Role::Teacher).await;
        let (_, student_token) = create_user(&app.state, "s@school.test", Role::Student).await;

        let response = app
            .router
            .clone()
            .oneshot(request("POST", "/api/courses", Some(&teacher_token), Some(&course_payload("Biology"))))
            .await
            .unwrap();
        let course_id = get_json_body(response).await["data"]["id"].as_i64().unwrap();

        // browse is student-only
        let response = app
            .router
            .clone()
            .oneshot(request("GET", "/api/courses/browse", Some(&teacher_token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app
            .router
            .clone()
            .oneshot(request("GET", "/api/courses/browse", Some(&student_token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["data"].as_array().unwrap().len(), 1);

        let status_uri = format!("/api/courses/{course_id}/enrollment-status");
        let response = app
            .router
            .clone()
            .oneshot(request("GET", &status_uri, Some(&student_token), None))
            .await
            .unwrap();
        assert_eq!(get_json_body(response).await["data"]["enrolled"], false);

        let enroll_uri = format!("/api/courses/{course_id}/enroll");
        let response = app
            .router
            .clone()
            .oneshot(request("POST", &enroll_uri, Some(&student_token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(get_json_body(response).await["message"], "Enrolled successfully");

        let response = app
            .router
            .clone()
            .oneshot(request("POST", &enroll_uri, Some(&student_token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "Already enrolled");

        let response = app
            .router
            .clone()
            .oneshot(request("GET", &status_uri, Some(&student_token), None))
            .await
            .unwrap();
        assert_eq!(get_json_body(response).await["data"]["enrolled"], true);

        // teachers are never enrolled
        let response = app
            .router
            .clone()
            .oneshot(request("GET", &status_uri, Some(&teacher_token), None))
            .await
            .unwrap();
        assert_eq!(get_json_body(response).await["data"]["enrolled"], false);

        let response = app
            .router
            .oneshot(request("GET", "/api/courses", Some(&student_token), None))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["id"], course_id);
    }

    #[tokio::test]
    async fn test_missing_course() {
        let app = make_test_app().await;
        let (_, token) = create_user(&app.state, "s@school.test", Role::Student).await;

        let response = app
            .router
            .clone()
            .oneshot(request("GET", "/api/courses/999", Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Course not found");

        let response = app
            .router
            .oneshot(request("POST", "/api/courses/999/enroll", Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
