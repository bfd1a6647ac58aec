//! Builtin portfolio content.
//!
//! Every function constructs owned values, so callers always work with an
//! instantiable catalog they can replace wholesale from configuration rather
//! than with shared module state. Template contents are carried verbatim and
//! saved files must match them byte for byte.

use crate::models::{
    EventKind, Profile, Project, SkillCategory, SocialLink, Template, TemplateKind, TimelineEvent,
};

/// The featured project catalog, in display order.
pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "Azure DevOps CI/CD Pipeline for ASP.NET Applications",
            "End-to-end CI/CD pipeline implementation on Azure DevOps featuring automated Docker containerization, Azure Container Registry integration, and continuous deployment workflows for ASP.NET Core applications.",
            "/project-showcase-github/Asp_Net_App_Pipeline_on_AzureDevops.pdf",
        ),
        Project::new(
            "ASP.NET Cloud Deployment Platform",
            "Production-ready ASP.NET application deployed on Google Cloud Platform with SQL Server database integration and secure firewall management.",
            "/project-showcase-github/DotNet_App_Deployment_and_Database_Setup.pdf",
        ),
        Project::new(
            "PHP Application Deployment with Docker",
            "Containerized PHP application with Docker, PHP-FPM, Nginx, Supervisor for process management, and automated cron jobs for task scheduling.",
            "/project-showcase-github/Php_App_Fine_tuning_and_Deployment_Docker_Php-Fpm_Nginx_Supervisor_Cronjobs.pdf",
        ),
        Project::new(
            "Server Monitoring Dashboard with Slack Integration",
            "Real-time server and website uptime monitoring system built with Prometheus, Node Exporter, Blackbox Exporter, and Grafana featuring automated Slack alerting.",
            "/project-showcase-github/server-monitoring.pdf",
        ),
        Project::new(
            "PostgreSQL Monitoring Platform on Kubernetes",
            "Enterprise-grade PostgreSQL deployment on Kubernetes with PgAdmin management interface and comprehensive monitoring via Prometheus and Grafana.",
            "https://medium.com/@haidersarfraz0323/you-can-check-that-your-kubernetes-node-is-running-with-ea2c5fc9ec2d",
        ),
        Project::new(
            "Windows System Health Monitor",
            "Real-time Windows system monitoring dashboard with Grafana and Prometheus integration for tracking CPU, memory, disk, and network performance metrics.",
            "https://medium.com/@haidersarfraz0323/visualize-windows-system-health-in-real-time-with-grafana-and-prometheus-e40700650afa",
        ),
        Project::new(
            "Kubernetes GitOps Deployment Pipeline",
            "Automated application deployment system implementing GitOps methodology with Kubernetes and Argo CD for continuous delivery and infrastructure management.",
            "https://medium.com/@haidersarfraz0323/how-to-deploy-applications-on-kubernetes-using-gitops-and-argo-cd-0fb9ef5d15f8",
        ),
        Project::new(
            "AWS Cloud Security Monitoring System",
            "Comprehensive security monitoring platform using AWS CloudTrail, CloudWatch, and SNS for real-time threat detection and automated security alerts.",
            "https://medium.com/@haidersarfraz0323/build-a-security-monitoring-system-on-aws-cloudtrail-cloudwatch-sns-079e47494556",
        ),
        Project::new(
            "Windows Remote Desktop Access Portal",
            "Secure Windows RDP configuration system with user management, connection troubleshooting, and enhanced security protocols for remote access.",
            "/project-showcase-github/Window_Rdp_Connection.pdf",
        ),
        Project::new(
            "AWS Multi-Environment CI/CD Pipeline",
            "Automated deployment pipeline for development and staging environments with AWS EC2, Application Load Balancer, SSL certificates, and custom domain configuration.",
            "/project-showcase-github/Code_Pipeline_Dev_Staging_Certificate_LoadBalancer_Domain.pdf",
        ),
        Project::new(
            "Monster Rolodex",
            "A React application that displays a collection of monsters with search functionality and responsive design.",
            "https://github.com/haiderali9-9/-monster-rolodox",
        ),
        Project::new(
            "Meal Search",
            "An application to search for meals and recipes with detailed information and instructions.",
            "https://github.com/haiderali9-9/mealsearch",
        ),
        Project::new(
            "Find Pokemon",
            "A Pokemon search application built with modern web technologies to explore and discover Pokemon.",
            "https://github.com/haiderali9-9/FindPokemon",
        ),
        Project::new(
            "Carpool",
            "A carpooling platform to connect drivers and passengers for shared rides and sustainable transportation.",
            "https://github.com/haiderali9-9/Carpool",
        ),
    ]
}

/// The Dockerfile and pipeline collections, Dockerfiles first.
pub fn templates() -> Vec<Template> {
    let mut all = dockerfiles();
    all.extend(pipelines());
    all
}

fn dockerfile(name: &str, title: &str, description: &str, technologies: &[&str], content: &str) -> Template {
    Template {
        name: name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        kind: TemplateKind::Dockerfile,
        file_name: None,
        content: content.to_string(),
    }
}

fn dockerfiles() -> Vec<Template> {
    vec![
        dockerfile(
            "laravel",
            "PHP-FPM with Nginx & Laravel",
            "Production-ready PHP 8.2 FPM with Nginx, Supervisor, complete Laravel setup including migrations, asset building, and optimized caching.",
            &["Docker", "PHP-FPM", "Nginx", "Laravel", "Composer", "Supervisor"],
            r#"# Base image
FROM php:8.2-fpm-alpine

# Set default environment
ENV APP_ENV=production

# Set working directory
WORKDIR /var/www/html

# Install system dependencies + PHP extensions
RUN apk add --no-cache \
    curl zip unzip git nodejs npm nginx supervisor gcc g++ make autoconf \
    libpng-dev libjpeg-turbo-dev libwebp-dev freetype-dev \
    oniguruma-dev libxml2-dev icu-dev zlib-dev libzip-dev \
    && docker-php-ext-configure gd \
        --with-freetype \
        --with-jpeg \
        --with-webp \
    && docker-php-ext-install -j$(nproc) \
        gd pdo pdo_mysql mbstring xml intl zip bcmath opcache

# Install Composer
COPY --from=composer:2 /usr/bin/composer /usr/bin/composer

# Copy and activate PHP configuration
RUN cp /usr/local/etc/php/php.ini-development /usr/local/etc/php/php.ini

# Copy production configuration files
COPY configuration/production/custom-php-setting.ini /usr/local/etc/php/conf.d/custom-php-setting.ini
COPY configuration/production/nginx.conf /etc/nginx/nginx.conf

# Copy Supervisor configuration file
COPY ./supervisor/supervisor.conf /etc/supervisor/conf.d/supervisor.conf

# Copy application code
COPY . .

# Mark /var/www/html as safe for git
RUN git config --global --add safe.directory /var/www/html

# Install PHP dependencies
RUN composer install --no-interaction --prefer-dist --optimize-autoloader

# Install JavaScript dependencies
RUN npm install

# Build frontend assets
RUN npm run build

# Cache Laravel config/routes/views and run migrations
RUN php artisan config:clear && \
    php artisan config:cache && \
    php artisan view:cache && \
    php artisan migrate --force

# Set correct permissions
RUN chown -R www-data:www-data /var/www/html && \
    chmod -R 775 /var/www/html/storage /var/www/html/bootstrap/cache

# Switch to non-root user
USER root

# Expose PHP-FPM port
EXPOSE 80

# Start Supervisor (manages PHP-FPM + Nginx)
CMD ["/usr/bin/supervisord", "-c", "/etc/supervisor/conf.d/supervisor.conf"]"#,
        ),
        dockerfile(
            "node",
            "Node.js Application",
            "Production-ready Node.js Dockerfile with multi-stage build for optimized image size.",
            &["Docker", "Node.js", "npm"],
            r#"FROM node:18-alpine AS builder

WORKDIR /app
COPY package*.json ./
RUN npm ci --only=production

FROM node:18-alpine
WORKDIR /app
COPY --from=builder /app/node_modules ./node_modules
COPY . .

EXPOSE 3000
CMD ["node", "server.js"]"#,
        ),
        dockerfile(
            "flask",
            "Python Flask Application",
            "Containerized Python Flask app with proper dependency management and security best practices.",
            &["Docker", "Python", "Flask", "Gunicorn"],
            r#"FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

EXPOSE 5000
CMD ["gunicorn", "--bind", "0.0.0.0:5000", "app:app"]"#,
        ),
        dockerfile(
            "postgres",
            "PostgreSQL with Custom Config",
            "PostgreSQL container with custom configuration for performance tuning and data persistence.",
            &["Docker", "PostgreSQL"],
            r#"FROM postgres:15-alpine

# Copy custom PostgreSQL configuration
COPY postgresql.conf /etc/postgresql/postgresql.conf

# Set environment variables
ENV POSTGRES_DB=myapp
ENV POSTGRES_USER=admin
ENV PGDATA=/var/lib/postgresql/data/pgdata

EXPOSE 5432

CMD ["postgres", "-c", "config_file=/etc/postgresql/postgresql.conf"]"#,
        ),
        dockerfile(
            "react",
            "React Application",
            "Multi-stage build for React apps with Nginx serving static files in production.",
            &["Docker", "React", "Nginx", "Node.js"],
            r#"FROM node:18-alpine AS builder

WORKDIR /app
COPY package*.json ./
RUN npm ci
COPY . .
RUN npm run build

FROM nginx:alpine
COPY --from=builder /app/dist /usr/share/nginx/html
COPY nginx.conf /etc/nginx/conf.d/default.conf

EXPOSE 80
CMD ["nginx", "-g", "daemon off;"]"#,
        ),
        dockerfile(
            "mongo",
            "MongoDB with Authentication",
            "MongoDB container with authentication enabled and custom initialization scripts.",
            &["Docker", "MongoDB"],
            r#"FROM mongo:7.0

# Copy initialization script
COPY mongo-init.js /docker-entrypoint-initdb.d/

ENV MONGO_INITDB_ROOT_USERNAME=admin
ENV MONGO_INITDB_ROOT_PASSWORD=secure_password
ENV MONGO_INITDB_DATABASE=myapp

EXPOSE 27017

CMD ["mongod", "--auth"]"#,
        ),
        dockerfile(
            "dotnet",
            ".NET 8.0 Application",
            "Multi-stage build for .NET applications with ASP.NET Core runtime for production deployment.",
            &["Docker", ".NET", "ASP.NET Core"],
            r#"# Stage 1: Build the application
FROM mcr.microsoft.com/dotnet/sdk:8.0 AS build
WORKDIR /src

# Copy project files and restore dependencies
COPY ["MyWebApp/MyWebApp.csproj", "MyWebApp/"]
RUN dotnet restore "MyWebApp/MyWebApp.csproj"

# Copy source code and build
COPY . .
WORKDIR "/src/MyWebApp"
RUN dotnet build "MyWebApp.csproj" -c Release -o /app/build

# Stage 2: Publish the application
FROM build AS publish
RUN dotnet publish "MyWebApp.csproj" -c Release -o /app/publish

# Stage 3: Create runtime image
FROM mcr.microsoft.com/dotnet/aspnet:8.0 AS runtime
WORKDIR /app
COPY --from=publish /app/publish .
EXPOSE 80
ENTRYPOINT ["dotnet", "MyWebApp.dll"]"#,
        ),
    ]
}

fn pipelines() -> Vec<Template> {
    vec![
        Template {
            name: "github-actions-ssh".to_string(),
            title: "GitHub Actions - SSH Deployment".to_string(),
            description: "Automated deployment pipeline using GitHub Actions with SSH connection to remote server for continuous deployment.".to_string(),
            technologies: vec!["GitHub Actions".to_string(), "SSH".to_string(), "Ubuntu".to_string()],
            kind: TemplateKind::Pipeline,
            file_name: Some("github-actions-ssh.yml".to_string()),
            content: r#"on:
  push:
    branches:
      - main
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - name: "SSH Into the system"
        run: |
          echo "${{ vars.KEY }}" >> key.pem.b64
          base64 --decode key.pem.b64 > key.pem
          chmod 600 key.pem
          ssh -i key.pem -o StrictHostKeyChecking=no haideralibjssoftsolution@136.115.207.167"#
                .to_string(),
        },
        Template {
            name: "azure-pipelines".to_string(),
            title: "Azure DevOps - Docker Deployment".to_string(),
            description: "Azure DevOps pipeline with self-hosted agent for building and deploying Docker containers with automated testing.".to_string(),
            technologies: vec!["Azure DevOps".to_string(), "Docker".to_string(), "ASP.NET Core".to_string()],
            kind: TemplateKind::Pipeline,
            file_name: Some("azure-pipelines.yml".to_string()),
            content: r#"trigger:
- main  # or your branch name

pool:
  name: devops1  # your self-hosted agent pool

steps:
# Step 1: Checkout source
- checkout: self
  displayName: 'Checkout source code'

# Step 2: Build Docker image
- script: |
    echo "Building Docker image..."
    docker build -t mywebapp .
  displayName: 'Build Docker Image'

# Step 3: Remove old container if exists & run new one
- script: |
    echo "Stopping and removing existing container (if any)..."
    docker rm -f mywebapp_container || echo "No existing container"
    echo "Running new container..."
    docker run -d -p 8080:80 -e ASPNETCORE_URLS=http://+:80 --name mywebapp_container mywebapp
  displayName: 'Run Docker Container'

# Step 4: Verify container is running
- powershell: |
    Write-Host "Listing running containers..."
    docker ps
    Write-Host "Testing application endpoint..."
    Invoke-WebRequest -Uri http://localhost:8080 -UseBasicParsing
  displayName: 'Verify App is Running'"#
                .to_string(),
        },
    ]
}

/// The six skill categories on the expertise grid.
pub fn skill_categories() -> Vec<SkillCategory> {
    fn category(title: &str, skills: &[&str]) -> SkillCategory {
        SkillCategory {
            title: title.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        category("Cloud Platforms", &["AWS", "Google Cloud"]),
        category("Containerization", &["Docker", "Kubernetes", "Container Registry"]),
        category("CI/CD & GitOps", &["GitHub Actions", "Jenkins", "GitLab CI"]),
        category("Infrastructure", &["Ansible", "Prometheus", "Grafana"]),
        category("Scripting & Automation", &["Bash", "Python", "PowerShell", "Linux"]),
        category("Development", &["Node.js", "React", "MongoDB", "PostgreSQL"]),
    ]
}

/// Career timeline, most recent first.
pub fn timeline() -> Vec<TimelineEvent> {
    fn event(
        kind: EventKind,
        title: &str,
        organization: &str,
        period: &str,
        description: &str,
        highlights: &[&str],
    ) -> TimelineEvent {
        TimelineEvent {
            kind,
            title: title.to_string(),
            organization: organization.to_string(),
            period: period.to_string(),
            description: description.to_string(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
        }
    }

    vec![
        event(
            EventKind::Work,
            "DevOps Engineer",
            "Tech Solutions Inc.",
            "2023 - Present",
            "Leading infrastructure automation and CI/CD pipeline implementations. Managing Docker containerization, Kubernetes orchestration, and cloud infrastructure on AWS and GCP.",
            &[
                "Reduced deployment time by 60% through automated CI/CD pipelines",
                "Implemented monitoring solutions using Prometheus and Grafana",
                "Managed production infrastructure serving 100K+ users",
            ],
        ),
        event(
            EventKind::Work,
            "Junior DevOps Engineer",
            "Cloud Innovations",
            "2022 - 2023",
            "Focused on containerization strategies and deployment automation. Built and maintained Docker-based development environments and CI/CD workflows.",
            &[
                "Dockerized 15+ legacy applications",
                "Implemented GitHub Actions workflows for automated testing",
                "Collaborated with development teams on infrastructure optimization",
            ],
        ),
        event(
            EventKind::Education,
            "Bachelor's in Computer Science",
            "University Name",
            "2018 - 2022",
            "Specialized in cloud computing and distributed systems. Completed projects in infrastructure automation and containerization.",
            &[
                "Focus on Cloud Computing and DevOps practices",
                "Final year project on Kubernetes cluster management",
                "Relevant coursework: System Administration, Network Security",
            ],
        ),
        event(
            EventKind::Certification,
            "AWS Certified Solutions Architect",
            "Amazon Web Services",
            "2023",
            "Validated expertise in designing and deploying scalable systems on AWS.",
            &[],
        ),
        event(
            EventKind::Certification,
            "Docker Certified Associate",
            "Docker Inc.",
            "2022",
            "Demonstrated proficiency in Docker containerization and orchestration.",
            &[],
        ),
    ]
}

/// Contact card links.
pub fn social_links() -> Vec<SocialLink> {
    fn link(label: &str, href: &str, display: &str) -> SocialLink {
        SocialLink {
            label: label.to_string(),
            href: href.to_string(),
            display: display.to_string(),
        }
    }

    vec![
        link("GitHub", "https://github.com/haiderali9-9", "@haiderali9-9"),
        link(
            "LinkedIn",
            "https://www.linkedin.com/in/hyderali99/",
            "linkedin.com/in/hyderali99",
        ),
        link(
            "Email",
            "mailto:haidersarfraz0323@gmail.com",
            "haidersarfraz0323@gmail.com",
        ),
        link(
            "Alternative Email",
            "mailto:haider.allee.99@gmail.com",
            "haider.allee.99@gmail.com",
        ),
    ]
}

/// Hero and introduction block.
pub fn profile() -> Profile {
    Profile {
        title: "DevOps Portfolio".to_string(),
        tagline: "Junior DevOps Engineer | Docker & CI/CD Pipelines | PHP App Deployment | Monitoring & Automation"
            .to_string(),
        intro: "Senior DevOps Engineer & Cloud Solutions Architect with expertise in Kubernetes orchestration, AWS infrastructure, CI/CD automation, and cloud-native application deployment. Specialized in building scalable, highly available systems with infrastructure-as-code and GitOps methodologies."
            .to_string(),
        tags: [
            "Docker",
            "CI/CD Pipelines",
            "PHP Deployment",
            "Prometheus",
            "Grafana",
            "Automation",
            "GitHub Actions",
            "Jenkins",
            "GitLab CI",
            "AWS",
            "Google Cloud",
            "Linux",
            "Bash",
        ]
        .iter()
        .map(|t| t.to_string())
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let projects = projects();
        assert_eq!(projects.len(), 14);
        for p in &projects {
            assert!(!p.title.is_empty());
            assert!(!p.description.is_empty());
            assert!(!p.reference.is_empty());
        }
        // Six showcase documents among the fourteen entries
        assert_eq!(projects.iter().filter(|p| p.is_document()).count(), 6);
    }

    #[test]
    fn test_template_names_unique() {
        let templates = templates();
        assert_eq!(templates.len(), 9);
        let mut names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), templates.len());
    }

    #[test]
    fn test_pipelines_carry_explicit_file_names() {
        for t in templates() {
            match t.kind {
                TemplateKind::Pipeline => assert!(t.file_name.is_some(), "{} lacks a file name", t.name),
                TemplateKind::Dockerfile => assert!(t.file_name.is_none()),
            }
        }
    }

    #[test]
    fn test_node_template_content() {
        let templates = templates();
        let node = templates.iter().find(|t| t.name == "node").unwrap();
        assert!(node.content.starts_with("FROM node:18-alpine"));
        assert_eq!(node.download_name(), "node.js-application-Dockerfile");
    }

    #[test]
    fn test_profile_and_supporting_content() {
        let profile = profile();
        assert_eq!(profile.title, "DevOps Portfolio");
        assert_eq!(profile.tags.len(), 13);
        assert_eq!(skill_categories().len(), 6);
        assert_eq!(timeline().len(), 5);
        assert_eq!(social_links().len(), 4);
    }
}
