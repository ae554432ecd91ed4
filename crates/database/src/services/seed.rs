use crate::{
    entities::{assignments, courses, forums, posts, topics, users},
    error::Result,
    password::hash_password,
};
use chrono::{Duration, Utc};
use log::info;
use models::{Role, UserStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, TransactionTrait,
};

/// Password every demo account logs in with
pub const DEMO_PASSWORD: &str = "password";

const FORUMS: [(&str, &str); 5] = [
    (
        "Architecture Logicielle",
        "Discussions sur les patterns, microservices et architecture système",
    ),
    (
        "Intelligence Artificielle",
        "Machine Learning, Deep Learning et IA générative",
    ),
    (
        "Sécurité Informatique",
        "Cybersécurité, cryptographie et protection des données",
    ),
    (
        "Data Science",
        "Analyse de données, visualisation et Big Data",
    ),
    (
        "Projet de Fin d'Études",
        "Partage d'expériences et conseils pour les projets",
    ),
];

pub struct SeedService;

impl SeedService {
    /// Load the demo campus when the database has no users yet.
    ///
    /// Returns whether anything was written. Everything goes in one
    /// transaction, so a failure leaves the database empty.
    pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<bool> {
        if users::Entity::find().count(db).await? > 0 {
            info!("Database already has users, skipping demo data");
            return Ok(false);
        }

        let txn = db.begin().await?;

        let admin = insert_user(&txn, "admin@campus.fr", "Admin", "Campus", Role::Admin).await?;
        let teacher = insert_user(&txn, "prof@campus.fr", "Jean", "Dupont", Role::Teacher).await?;
        let student =
            insert_user(&txn, "etudiant@campus.fr", "Marie", "Martin", Role::Student).await?;

        let web = courses::ActiveModel {
            title: Set("Développement Web Avancé".to_string()),
            description: Set(Some("Cours sur les technologies web modernes".to_string())),
            code: Set("DWA-M2".to_string()),
            credits: Set(6),
            semester: Set(Some("S1".to_string())),
            teacher_id: Set(teacher.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        let databases = courses::ActiveModel {
            title: Set("Base de Données".to_string()),
            description: Set(Some("Conception et gestion de bases de données".to_string())),
            code: Set("BDD-M2".to_string()),
            credits: Set(4),
            semester: Set(Some("S1".to_string())),
            teacher_id: Set(teacher.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let now = Utc::now().naive_utc();
        for (title, description, course_id, days) in [
            ("Projet React", "Créer une application React complète", web.id, 7),
            (
                "Modélisation BDD",
                "Concevoir un modèle de base de données",
                databases.id,
                14,
            ),
        ] {
            assignments::ActiveModel {
                title: Set(title.to_string()),
                description: Set(Some(description.to_string())),
                due_date: Set(Some(now + Duration::days(days))),
                max_points: Set(super::assignment::DEFAULT_MAX_POINTS),
                course_id: Set(course_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        let mut forum_ids = Vec::with_capacity(FORUMS.len());
        for (name, description) in FORUMS {
            let forum = forums::ActiveModel {
                name: Set(name.to_string()),
                description: Set(description.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            forum_ids.push(forum.id);
        }

        let topic = topics::ActiveModel {
            title: Set("Aide pour implémenter un pattern Observer".to_string()),
            content: Set("Bonjour à tous,\n\nJe travaille sur un projet où je dois implémenter \
                 le pattern Observer en JavaScript/TypeScript."
                .to_string()),
            priority: Set(topics::DEFAULT_PRIORITY.to_string()),
            forum_id: Set(forum_ids[0]),
            author_id: Set(student.id),
            views: Set(0),
            likes_count: Set(0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for (content, author_id, likes) in [
            (
                "Excellente question ! Le pattern Observer est parfait pour ton cas. \
                 Voici un exemple simple...",
                teacher.id,
                5,
            ),
            (
                "Je rajouterais qu'avec React, tu peux aussi utiliser des hooks \
                 personnalisés pour implémenter ce pattern.",
                admin.id,
                2,
            ),
        ] {
            posts::ActiveModel {
                content: Set(content.to_string()),
                topic_id: Set(topic.id),
                author_id: Set(author_id),
                likes_count: Set(likes),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        info!("Loaded demo data: 3 users, 2 courses, {} forums", FORUMS.len());

        Ok(true)
    }
}

/// Demo account with [`DEMO_PASSWORD`] under its own salt
async fn insert_user<C: ConnectionTrait>(
    db: &C,
    email: &str,
    first_name: &str,
    last_name: &str,
    role: Role,
) -> Result<users::Model> {
    Ok(users::ActiveModel {
        email: Set(email.to_string()),
        password: Set(hash_password(DEMO_PASSWORD)?),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        role: Set(role),
        status: Set(UserStatus::Active),
        ..Default::default()
    }
    .insert(db)
    .await?)
}
