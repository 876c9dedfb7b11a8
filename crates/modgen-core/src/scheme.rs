/// Capability scheme advertised to the host on `--scheme`.
///
/// A pure constant: byte-identical on every call. It declares the single
/// `num_events` argument, requests external validation, and commits to
/// simple streaming in a single instance.
pub const SCHEME: &str = r#"<scheme>
    <title>My Simple Modular Input</title>
    <description>A Simple Modular Input</description>
    <use_external_validation>true</use_external_validation>
    <streaming_mode>simple</streaming_mode>
    <use_single_instance>true</use_single_instance>
    <endpoint>
        <args>
            <arg name="num_events">
                <title>Number of events to generate</title>
                <description>The number of events to generate each time the modular input runs.</description>
                <validation>is_nonneg_int('num_events')</validation>
                <data_type>number</data_type>
            </arg>
        </args>
    </endpoint>
</scheme>"#;

/// The capability scheme document.
pub fn scheme() -> &'static str {
    SCHEME
}
