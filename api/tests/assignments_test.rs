mod helpers;

#[cfg(test)]
mod tests {
    use crate::helpers::{create_user, get_json_body, make_test_app, request};
    use axum::http::StatusCode;
    use db::models::{course, user::Role};
    use serde_json::json;
    use tower::ServiceExt;

    fn assignment_payload(course_id: i64, max_score: i64) -> serde_json::Value {
        json!({
            "course_id": course_id,
            "title": "Essay: The Water Cycle",
            "description": "Explain each stage with an example",
            "due_date": "2030-01-15T23:59:00Z",
            "max_score": max_score
        })
    }

    #[tokio::test]
    async fn test_create_get_and_list() {
        let app = make_test_app().await;
        let (teacher, token) = create_user(&app.state, "t@school.test", Role::Teacher).await;
        let course = course::Model::create(app.state.db(), teacher.id, "Science", "", "Science")
            .await
            .unwrap();

        let response = app
            .router
            .clone()
            .oneshot(request("POST", "/api/assignments", Some(&token), Some(&assignment_payload(course.id, 100))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = get_json_body(response).await;
        let id = json["data"]["id"].as_i64().unwrap();
        assert_eq!(json["data"]["max_score"], 100);

        let response = app
            .router
            .clone()
            .oneshot(request("GET", &format!("/api/assignments/{id}"), Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["data"]["course_id"], course.id);

        let response = app
            .router
            .oneshot(request("GET", &format!("/api/assignments/course/{}", course.id), Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_other_teachers_course_is_not_found() {
        let app = make_test_app().await;
        let (owner, _) = create_user(&app.state, "owner@school.test", Role::Teacher).await;
        let (_, token) = create_user(&app.state, "other@school.test", Role::Teacher).await;
        let course = course::Model::create(app.state.db(), owner.id, "Art", "", "Art")
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(request("POST", "/api/assignments", Some(&token), Some(&assignment_payload(course.id, 10))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Course not found");
    }

    #[tokio::test]
    async fn test_zero_max_score_is_rejected() {
        let app = make_test_app().await;
        let (teacher, token) = create_user(&app.state, "t@school.test", Role::Teacher).await;
        let course = course::Model::create(app.state.db(), teacher.id, "Music", "", "Music")
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(request("POST", "/api/assignments", Some(&token), Some(&assignment_payload(course.id, 0))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["message"], "Max score must be at least 1");
    }

    #[tokio::test]
    async fn test_student_cannot_create_assignment() {
        let app = make_test_app().await;
        let (_, token) = create_user(&app.state, "s@school.test", Role::Student).await;

        let response = app
            .router
            .oneshot(request("POST", "/api/assignments", Some(&token), Some(&assignment_payload(1, 10))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_missing_lookups() {
        let app = make_test_app().await;
        let (_, token) = create_user(&app.state, "s@school.test", Role::Student).await;

        let response = app
            .router
            .clone()
            .oneshot(request("GET", "/api/assignments/42", Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Assignment not found");

        let response = app
            .router
            .oneshot(request("GET", "/api/assignments/course/42", Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Course not found");
    }
}
