use super::Step;

/// The stock OpenData walkthrough: local run, cloud storage, production,
/// scaling, and a second database.
pub fn builtin() -> Vec<Step> {
    vec![
        Step::new(
            "Local Development",
            "Start OpenData Log locally with a single command. Data is stored on local disk. \
             No dependencies, no setup. Write a message and read it back.",
            "terminal",
            r#"# Start OpenData Log locally
$ docker run -p 8080:8080 opendata/log:latest

# Write a message
$ curl -X POST http://localhost:8080/v1/topics/events/messages \
    -H "Content-Type: application/json" \
    -d '{"value": "hello, opendata"}'

{"offset": 0, "topic": "events"}

# Read it back
$ curl http://localhost:8080/v1/topics/events/messages?offset=0

{"messages": [{"offset": 0, "value": "hello, opendata"}]}"#,
        ),
        Step::new(
            "Move to Cloud Storage",
            "Change one config value. You now have 11 nines of durability with replicated \
             object storage. No MinIO, no local S3 emulation. SlateDB makes local disk \
             and object storage interchangeable.",
            "opendata.toml",
            r#"# Before: local disk
[storage]
backend = "local"
path = "/data/opendata-log"

# After: cloud object storage
[storage]
backend = "s3"
bucket = "my-opendata-bucket"
region = "us-east-1"

# Everything else stays the same.
# Same container. Same API. Same data format."#,
        ),
        Step::new(
            "Deploy to Production",
            "Same container image, same metrics, same operational model as your laptop. \
             Add a Prometheus scrape config and you have full observability.",
            "docker-compose.yml",
            r#"services:
  opendata-log:
    image: opendata/log:latest
    ports:
      - "8080:8080"
      - "9090:9090"  # metrics
    environment:
      OPENDATA_STORAGE_BACKEND: s3
      OPENDATA_STORAGE_BUCKET: my-opendata-bucket
      OPENDATA_STORAGE_REGION: us-east-1
    # TODO: Add resource limits, health checks

  prometheus:
    image: prom/prometheus:latest
    volumes:
      - ./prometheus.yml:/etc/prometheus/prometheus.yml
    # Scrape opendata-log:9090/metrics"#,
        ),
        Step::new(
            "Scale",
            "Add read replicas with a single command. Readers and writers are stateless and \
             decoupled: no rebalancing, no leader election, no data migration. The CLI \
             is shared across all OpenData databases.",
            "terminal",
            r#"# Scale up read replicas
$ opendata scale log --readers 3

Scaling opendata-log readers: 1 → 3
  ✓ Reader replica 2 started
  ✓ Reader replica 3 started
  ✓ Load balancer updated

# Check cluster status
$ opendata status log

opendata-log
  Writers:  1 (active)
  Readers:  3 (healthy)
  Storage:  s3://my-opendata-bucket
  Lag:      < 100ms"#,
        ),
        Step::new(
            "Add Another Database",
            "Deploy OpenData Timeseries with the exact same pattern. Same `docker run`, \
             same storage config, same CLI, same Prometheus metrics. \
             You already know how to operate this.",
            "terminal",
            r#"# Same pattern, different database
$ docker run -p 8081:8080 \
    -e OPENDATA_STORAGE_BACKEND=s3 \
    -e OPENDATA_STORAGE_BUCKET=my-opendata-bucket \
    opendata/timeseries:latest

# Write Prometheus metrics
$ curl -X POST http://localhost:8081/api/v1/write \
    --data-binary @metrics.prom

# Query with PromQL (it's Prometheus-compatible)
$ curl http://localhost:8081/api/v1/query \
    -d 'query=rate(http_requests_total[5m])'

# Same CLI, same scaling model
$ opendata scale timeseries --readers 2"#,
        ),
    ]
}
