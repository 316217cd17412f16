use iterdns_application::services::NameServerClient;
use iterdns_application::use_cases::IterativeResolver;
use iterdns_domain::Config;
use iterdns_infrastructure::dns::{HickoryMessageCodec, UdpTransport};
use tracing::info;

pub type DnsClient = NameServerClient<UdpTransport, HickoryMessageCodec>;

pub struct DnsServices {
    pub resolver: IterativeResolver<DnsClient>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver_config = &config.resolver;

        let transport = UdpTransport::bind(
            resolver_config.bind_address,
            resolver_config.max_response_size,
        )?;
        info!(
            local = %transport.local_addr()?,
            root_server = %resolver_config.root_server,
            timeout_secs = resolver_config.query_timeout,
            "DNS client ready"
        );

        let client = NameServerClient::new(
            transport,
            HickoryMessageCodec::new(),
            resolver_config.dns_port,
            resolver_config.timeout(),
        );

        Ok(Self {
            resolver: IterativeResolver::from_config(client, resolver_config),
        })
    }
}
